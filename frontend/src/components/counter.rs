use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::scroll::use_in_view;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterSuffix {
    None,
    Percent,
    Plus,
    PerSeven,
}

impl CounterSuffix {
    fn as_str(self) -> &'static str {
        match self {
            CounterSuffix::None => "",
            CounterSuffix::Percent => "%",
            CounterSuffix::Plus => "+",
            CounterSuffix::PerSeven => "/7",
        }
    }
}

/// The number a stat counter counts up to, plus how it is displayed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    pub decimals: usize,
    pub suffix: CounterSuffix,
}

impl CounterTarget {
    /// Returns `None` for texts that should be shown as-is, such as times
    /// (`08:00`) or anything without a number in it.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.contains(':') {
            return None;
        }

        let (number, suffix) = if let Some(rest) = text.strip_suffix("/7") {
            (rest, CounterSuffix::PerSeven)
        } else if text.contains('%') {
            (text, CounterSuffix::Percent)
        } else if text.contains('+') {
            (text, CounterSuffix::Plus)
        } else {
            (text, CounterSuffix::None)
        };

        let digits: String = number
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let value: f64 = digits.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let decimals = digits.split_once('.').map_or(0, |(_, frac)| frac.len());

        Some(Self {
            value,
            decimals,
            suffix,
        })
    }

    pub fn render(&self, value: f64) -> String {
        format!("{:.*}{}", self.decimals, value, self.suffix.as_str())
    }

    pub fn initial_text(&self) -> String {
        self.render(0.0)
    }

    pub fn final_text(&self) -> String {
        self.render(self.value)
    }
}

/// Frames of a count-up from zero to the target. Intermediate values are
/// floored to the target's precision, and the last frame is always the
/// target text itself.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: CounterTarget,
    frame: u32,
    frames: u32,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, duration_ms: u32, frame_ms: u32) -> Self {
        let frames = (duration_ms + frame_ms.max(1) - 1) / frame_ms.max(1);
        Self {
            target,
            frame: 0,
            frames: frames.max(1),
        }
    }

    fn value_at(&self, frame: u32) -> f64 {
        let raw = self.target.value * f64::from(frame) / f64::from(self.frames);
        let scale = 10f64.powi(self.target.decimals as i32);
        ((raw * scale).floor() / scale).min(self.target.value)
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.frame >= self.frames {
            return None;
        }
        self.frame += 1;
        if self.frame == self.frames {
            Some(self.target.final_text())
        } else {
            Some(self.target.render(self.value_at(self.frame)))
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub label: AttrValue,
}

/// Counts up to `value` once scrolled into view.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let target = CounterTarget::parse(&props.value);
    let text = {
        let value = props.value.clone();
        use_state(move || target.map_or_else(|| value.to_string(), |t| t.initial_text()))
    };
    let finished = use_state_eq(|| target.is_none());

    {
        let done = *finished;
        let text = text.clone();
        let finished = finished.clone();
        use_effect_with_deps(
            move |(in_view, done)| {
                let interval = match target {
                    Some(target) if *in_view && !*done => {
                        let animation = Rc::new(RefCell::new(CounterAnimation::new(
                            target,
                            config::COUNTER_DURATION_MS,
                            config::COUNTER_FRAME_MS,
                        )));
                        Some(Interval::new(config::COUNTER_FRAME_MS, move || {
                            let frame = animation.borrow_mut().next();
                            match frame {
                                Some(frame) => text.set(frame),
                                None => finished.set(true),
                            }
                        }))
                    }
                    _ => None,
                };
                // Dropping the interval cancels it.
                move || drop(interval)
            },
            (in_view, done),
        );
    }

    html! {
        <div class="stat-item" ref={node}>
            <span class="stat-number">{(*text).clone()}</span>
            if !props.label.is_empty() {
                <span class="stat-label">{props.label.clone()}</span>
            }
        </div>
    }
}
