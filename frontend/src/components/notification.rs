use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Warning => "notification warning",
            NotificationKind::Error => "notification error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Warning => "fas fa-exclamation-triangle",
            NotificationKind::Error => "fas fa-times-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }
}

/// Anything that can surface a notification to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl Notifier for Callback<Notification> {
    fn notify(&self, notification: Notification) {
        self.emit(notification);
    }
}

/// Callback handed down to components so they can raise notifications.
#[hook]
pub fn use_notifier() -> Callback<Notification> {
    use_context::<Callback<Notification>>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub children: Children,
}

/// Shows the latest notification over the page. Each new notification replaces
/// the previous one and restarts the expiry timer.
#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    let current = use_state(|| None::<(u64, Notification)>);
    let serial = use_mut_ref(|| 0u64);

    // Stable across renders so consumers are not re-rendered for nothing.
    let notify = {
        let current = current.clone();
        use_callback(
            move |notification: Notification, _| {
                let id = {
                    let mut serial = serial.borrow_mut();
                    *serial += 1;
                    *serial
                };
                current.set(Some((id, notification)));
            },
            (),
        )
    };

    {
        let current = current.clone();
        let shown = (*current).as_ref().map(|(id, _)| *id);
        use_effect_with_deps(
            move |shown| {
                let timeout = shown.map(|_| {
                    Timeout::new(config::NOTIFICATION_TIMEOUT_MS, move || current.set(None))
                });
                move || drop(timeout)
            },
            shown,
        );
    }

    let dismiss = {
        let current = current.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            current.set(None);
        })
    };

    html! {
        <ContextProvider<Callback<Notification>> context={notify}>
            { for props.children.iter() }
            {
                if let Some((id, notification)) = (*current).as_ref() {
                    html! {
                        <div key={*id} class={notification.kind.class()} role="status">
                            <i class={notification.kind.icon()}></i>
                            <span>{notification.message.clone()}</span>
                            <button class="notification-close" onclick={dismiss}>{"×"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </ContextProvider<Callback<Notification>>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_has_its_own_style() {
        assert_eq!(NotificationKind::Warning.class(), "notification warning");
        assert_eq!(NotificationKind::Error.icon(), "fas fa-times-circle");
        assert_ne!(
            NotificationKind::Success.class(),
            NotificationKind::Error.class()
        );
    }

    #[test]
    fn constructors_set_kind() {
        let n = Notification::warning("Please select a service.");
        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(n.message, "Please select a service.");
        assert_eq!(Notification::error("x").kind, NotificationKind::Error);
    }
}
