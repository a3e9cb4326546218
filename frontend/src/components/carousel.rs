use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    pub current: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn advanced(&self) -> Self {
        if self.len == 0 {
            return self.clone();
        }
        Self {
            current: (self.current + 1) % self.len,
            len: self.len,
        }
    }

    pub fn selected(&self, index: usize) -> Self {
        if index < self.len {
            Self {
                current: index,
                len: self.len,
            }
        } else {
            self.clone()
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Advance => Rc::new(self.advanced()),
            CarouselAction::Select(index) => Rc::new(self.selected(index)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub image: AttrValue,
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct HeroCarouselProps {
    pub slides: Vec<Slide>,
}

// Whichever timer currently drives the carousel. Dropping it cancels it.
enum CarouselTimer {
    AutoAdvance(Interval),
    Resume(Timeout),
    Idle,
}

#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &HeroCarouselProps) -> Html {
    let state = use_reducer(|| CarouselState::new(props.slides.len()));
    // Serial of the last manual selection; `None` while auto-advancing.
    let paused = use_state_eq(|| None::<u32>);
    let selections = use_mut_ref(|| 0u32);

    {
        let dispatcher = state.dispatcher();
        let paused_handle = paused.clone();
        let len = props.slides.len();
        use_effect_with_deps(
            move |paused| {
                let timer = match paused {
                    _ if len < 2 => CarouselTimer::Idle,
                    None => CarouselTimer::AutoAdvance(Interval::new(
                        config::CAROUSEL_INTERVAL_MS,
                        move || dispatcher.dispatch(CarouselAction::Advance),
                    )),
                    Some(_) => CarouselTimer::Resume(Timeout::new(
                        config::CAROUSEL_RESUME_MS,
                        move || paused_handle.set(None),
                    )),
                };
                move || drop(timer)
            },
            *paused,
        );
    }

    let select = {
        let dispatcher = state.dispatcher();
        let paused = paused.clone();
        move |index: usize| {
            let dispatcher = dispatcher.clone();
            let paused = paused.clone();
            let selections = selections.clone();
            Callback::from(move |_: MouseEvent| {
                dispatcher.dispatch(CarouselAction::Select(index));
                let serial = {
                    let mut count = selections.borrow_mut();
                    *count = count.wrapping_add(1);
                    *count
                };
                paused.set(Some(serial));
            })
        }
    };

    html! {
        <div class="hero-carousel">
            { for props.slides.iter().enumerate().map(|(index, slide)| html! {
                <div class={classes!("carousel-slide", (index == state.current).then(|| "active"))}
                    style={format!("background-image: url('{}');", slide.image)}>
                    <div class="slide-content">
                        <h1>{slide.title.clone()}</h1>
                        <p>{slide.subtitle.clone()}</p>
                    </div>
                </div>
            }) }
            <div class="carousel-indicators">
                { for (0..props.slides.len()).map(|index| html! {
                    <button
                        class={classes!("indicator", (index == state.current).then(|| "active"))}
                        aria-label={format!("Slide {}", index + 1)}
                        onclick={select(index)}>
                    </button>
                }) }
            </div>
        </div>
    }
}
