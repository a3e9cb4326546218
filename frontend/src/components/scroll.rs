use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

// Matches a -50px bottom root margin: elements count as visible a little
// before they are fully on screen.
const REVEAL_MARGIN: f64 = 50.0;

pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN && bottom > 0.0
}

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

pub fn parallax_style(scroll_y: f64, rate: f64) -> String {
    format!(
        "transform: translateY({:.1}px) scale(1.1);",
        parallax_offset(scroll_y, rate)
    )
}

/// Becomes `true` the first time the referenced element scrolls into view and
/// stays `true`. The scroll listener is removed as soon as that happens.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let seen = *visible;
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, already)| {
                let destructor: Box<dyn FnOnce()> = match window() {
                    Some(window) if !*already => {
                        let check = {
                            let node = node.clone();
                            let window = window.clone();
                            move || {
                                let height = window
                                    .inner_height()
                                    .ok()
                                    .and_then(|h| h.as_f64())
                                    .unwrap_or(0.0);
                                if let Some(element) = node.cast::<Element>() {
                                    let rect = element.get_bounding_client_rect();
                                    if is_in_view(rect.top(), rect.bottom(), height) {
                                        visible.set(true);
                                    }
                                }
                            }
                        };
                        check();
                        let callback = Closure::<dyn Fn()>::new(check);
                        match window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                if window
                                    .remove_event_listener_with_callback(
                                        "scroll",
                                        callback.as_ref().unchecked_ref(),
                                    )
                                    .is_err()
                                {
                                    log::warn!("Could not stop watching scrolling for reveal effects");
                                }
                            }),
                            Err(_) => {
                                log::warn!("Could not watch scrolling for reveal effects");
                                Box::new(|| ())
                            }
                        }
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            (node, seen),
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());
    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), visible.then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    pub image: AttrValue,
    #[prop_or(0.3)]
    pub rate: f64,
}

#[function_component(ParallaxBackground)]
pub fn parallax_background(props: &ParallaxProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    html! {
        <div class="hero-bg-image"
            style={format!("background-image: url('{}'); {}", props.image, parallax_style(scroll_y, props.rate))}>
        </div>
    }
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
    html! {
        <a href="#" id="backToTop"
            class={classes!("back-to-top", (scroll_y > config::BACK_TO_TOP_AT).then(|| "visible"))}
            {onclick}>
            <i class="fas fa-arrow-up"></i>
        </a>
    }
}
