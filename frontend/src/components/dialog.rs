use web_sys::{window, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn closes_dialog(key: &str) -> bool {
    key == "Escape"
}

// Stops the page behind an open dialog from scrolling.
fn lock_body_scroll(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("No document body to lock scrolling on");
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if body.style().set_property("overflow", value).is_err() {
        log::warn!("Could not update body overflow");
    }
}

/// Page-level behavior shared by every dialog: while `open`, the body does
/// not scroll and Escape emits `on_close`.
#[hook]
pub fn use_dialog(open: bool, on_close: Callback<()>) {
    use_effect_with_deps(
        |open| {
            let locked = *open;
            lock_body_scroll(locked);
            move || {
                if locked {
                    lock_body_scroll(false);
                }
            }
        },
        open,
    );

    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if open && closes_dialog(&e.key()) {
            on_close.emit(());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_closes() {
        assert!(closes_dialog("Escape"));
        assert!(!closes_dialog("Enter"));
        assert!(!closes_dialog("Esc"));
    }
}
