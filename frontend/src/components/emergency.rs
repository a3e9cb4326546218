use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config;

pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

/// Call button that pulses for a moment every few seconds.
#[function_component(EmergencyButton)]
pub fn emergency_button() -> Html {
    let pulsing = use_state_eq(|| false);

    {
        let pulsing = pulsing.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::EMERGENCY_PULSE_EVERY_MS, move || {
                    pulsing.set(true)
                });
                move || drop(interval)
            },
            (),
        );
    }

    {
        let handle = pulsing.clone();
        use_effect_with_deps(
            move |pulsing| {
                let timeout = pulsing.then(|| {
                    Timeout::new(config::EMERGENCY_PULSE_MS, move || handle.set(false))
                });
                move || drop(timeout)
            },
            *pulsing,
        );
    }

    html! {
        <a href={tel_href(config::CONTACT_PHONE)}
            class={classes!("emergency-btn", (*pulsing).then(|| "pulse-animation"))}>
            <i class="fas fa-phone-alt"></i>{" 24/7 Emergency"}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_links_drop_spaces() {
        assert_eq!(tel_href("+27 17 647 0000"), "tel:+27176470000");
        assert_eq!(tel_href("0821234567"), "tel:0821234567");
    }
}
