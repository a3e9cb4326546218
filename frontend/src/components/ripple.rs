use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

const RIPPLE_LIFETIME_MS: u32 = 600;

#[derive(Clone, Debug, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

/// A ripple covering the whole button, centred on the click.
pub fn ripple_at(id: u32, click: (f64, f64), origin: (f64, f64), box_size: (f64, f64)) -> Ripple {
    let size = box_size.0.max(box_size.1);
    Ripple {
        id,
        size,
        x: click.0 - origin.0 - size / 2.0,
        y: click.1 - origin.1 - size / 2.0,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ripples {
    active: Vec<Ripple>,
}

pub enum RippleAction {
    Add {
        id: u32,
        click: (f64, f64),
        origin: (f64, f64),
        box_size: (f64, f64),
    },
    Remove(u32),
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RippleAction::Add {
                id,
                click,
                origin,
                box_size,
            } => next.active.push(ripple_at(id, click, origin, box_size)),
            RippleAction::Remove(id) => next.active.retain(|ripple| ripple.id != id),
        }
        next.into()
    }
}

/// Removal timers still held by a button. Timers that have run are dropped
/// on the next click, never from inside their own callback.
struct RippleTimers<T> {
    pending: Vec<(u32, T)>,
}

impl<T> Default for RippleTimers<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<T> RippleTimers<T> {
    fn prune(&mut self, fired: &mut Vec<u32>) {
        let fired = std::mem::take(fired);
        self.pending.retain(|(id, _)| !fired.contains(id));
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let node = use_node_ref();
    let ripples = use_reducer(Ripples::default);
    let next_id = use_mut_ref(|| 0u32);
    // Dropped with the button, which cancels any removal still pending.
    let timers = use_mut_ref(RippleTimers::<Timeout>::default);
    // Ids whose timer has run; kept apart so timers never hold themselves.
    let fired = use_mut_ref(Vec::<u32>::new);

    let onclick = {
        let node = node.clone();
        let dispatcher = ripples.dispatcher();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let id = {
                    let mut next = next_id.borrow_mut();
                    let id = *next;
                    *next = next.wrapping_add(1);
                    id
                };
                let rect = element.get_bounding_client_rect();
                dispatcher.dispatch(RippleAction::Add {
                    id,
                    click: (f64::from(e.client_x()), f64::from(e.client_y())),
                    origin: (rect.left(), rect.top()),
                    box_size: (rect.width(), rect.height()),
                });
                let timeout = {
                    let dispatcher = dispatcher.clone();
                    let fired = fired.clone();
                    Timeout::new(RIPPLE_LIFETIME_MS, move || {
                        fired.borrow_mut().push(id);
                        dispatcher.dispatch(RippleAction::Remove(id));
                    })
                };
                let mut timers = timers.borrow_mut();
                timers.prune(&mut fired.borrow_mut());
                timers.pending.push((id, timeout));
            }
            onclick.emit(e);
        })
    };

    html! {
        <button ref={node} class={classes!("ripple-host", props.class.clone())} {onclick}>
            { for props.children.iter() }
            { for ripples.active.iter().map(|ripple| html! {
                <span key={ripple.id} class="ripple" style={format!(
                    "width: {0}px; height: {0}px; left: {1}px; top: {2}px;",
                    ripple.size, ripple.x, ripple.y
                )}></span>
            }) }
        </button>
    }
}
