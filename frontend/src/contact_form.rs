use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::summary::format_local_timestamp;
use crate::booking::validation::is_valid_email;
use crate::components::notification::{use_notifier, Notification, Notifier};
use crate::config;
use crate::mail::{BrowserMailHandler, MailDraft, MailHandler, SubmissionError};

const REQUIRED: &str = "This field is required";
const INVALID_EMAIL: &str = "Please enter a valid email address";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactFormField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactFormField {
    pub const ALL: [ContactFormField; 5] = [
        ContactFormField::Name,
        ContactFormField::Email,
        ContactFormField::Phone,
        ContactFormField::Service,
        ContactFormField::Message,
    ];

    pub fn required(self) -> bool {
        matches!(
            self,
            ContactFormField::Name | ContactFormField::Email | ContactFormField::Message
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactFormField) -> &str {
        match field {
            ContactFormField::Name => &self.name,
            ContactFormField::Email => &self.email,
            ContactFormField::Phone => &self.phone,
            ContactFormField::Service => &self.service,
            ContactFormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactFormField, value: String) {
        match field {
            ContactFormField::Name => self.name = value,
            ContactFormField::Email => self.email = value,
            ContactFormField::Phone => self.phone = value,
            ContactFormField::Service => self.service = value,
            ContactFormField::Message => self.message = value,
        }
    }
}

pub fn field_error(field: ContactFormField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return field.required().then(|| REQUIRED);
    }
    if field == ContactFormField::Email && !is_valid_email(value) {
        return Some(INVALID_EMAIL);
    }
    None
}

pub fn form_errors(message: &ContactMessage) -> BTreeMap<ContactFormField, &'static str> {
    ContactFormField::ALL
        .iter()
        .filter_map(|field| field_error(*field, message.get(*field)).map(|err| (*field, err)))
        .collect()
}

pub fn compose_contact_email(message: &ContactMessage, submitted_at: NaiveDateTime) -> MailDraft {
    let or_dash = |value: &str| {
        if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.trim().to_string()
        }
    };
    let body = [
        "New Contact Form Submission".to_string(),
        String::new(),
        "CONTACT INFORMATION:".to_string(),
        format!("Name: {}", message.name.trim()),
        format!("Email: {}", message.email.trim()),
        format!("Phone: {}", or_dash(&message.phone)),
        format!("Service Interest: {}", or_dash(&message.service)),
        String::new(),
        "MESSAGE:".to_string(),
        message.message.trim().to_string(),
        String::new(),
        format!("Submitted: {}", format_local_timestamp(submitted_at)),
    ]
    .join("\n");
    MailDraft {
        subject: format!("Contact Form Submission - {}", message.name.trim()),
        body,
    }
}

pub fn send_contact_message(
    message: &ContactMessage,
    handler: &dyn MailHandler,
    notifier: &dyn Notifier,
    submitted_at: NaiveDateTime,
) -> Result<(), SubmissionError> {
    let draft = compose_contact_email(message, submitted_at);
    match handler.open(&draft.to_mailto(config::BOOKING_RECIPIENT)) {
        Ok(()) => {
            notifier.notify(Notification::success(
                "Message sent successfully! We'll get back to you within 24 hours.",
            ));
            Ok(())
        }
        Err(err) => {
            log::error!("Contact form submission failed: {}", err);
            notifier.notify(Notification::error(
                "There was an error sending your message. Please try calling us directly.",
            ));
            Err(err)
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let message = use_state(ContactMessage::default);
    let errors = use_state(BTreeMap::<ContactFormField, &'static str>::new);
    let notifier = use_notifier();

    let on_blur = |field: ContactFormField| {
        let message = message.clone();
        let errors = errors.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*errors).clone();
            match field_error(field, message.get(field)) {
                Some(err) => next.insert(field, err),
                None => next.remove(&field),
            };
            errors.set(next);
        })
    };

    let on_input = |field: ContactFormField| {
        let message = message.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                ContactFormField::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            let mut next = (*message).clone();
            next.set(field, value);
            message.set(next);
            if errors.contains_key(&field) {
                let mut cleared = (*errors).clone();
                cleared.remove(&field);
                errors.set(cleared);
            }
        })
    };

    let on_service = {
        let message = message.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*message).clone();
            next.set(ContactFormField::Service, select.value());
            message.set(next);
        })
    };

    let onsubmit = {
        let message = message.clone();
        let errors = errors.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = form_errors(&message);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            let sent = send_contact_message(
                &message,
                &BrowserMailHandler,
                &notifier,
                Local::now().naive_local(),
            );
            if sent.is_ok() {
                message.set(ContactMessage::default());
                errors.set(BTreeMap::new());
            }
        })
    };

    let error_for = |field: ContactFormField| match errors.get(&field) {
        Some(err) => html! { <div class="field-error">{*err}</div> },
        None => html! {},
    };
    let field_class = |field: ContactFormField| {
        classes!("form-group", errors.contains_key(&field).then(|| "has-error"))
    };

    html! {
        <form id="contactForm" class="contact-form" {onsubmit} novalidate=true>
            <div class={field_class(ContactFormField::Name)}>
                <input type="text" name="name" placeholder="Your name *" required=true
                    value={message.name.clone()}
                    oninput={on_input(ContactFormField::Name)}
                    onblur={on_blur(ContactFormField::Name)} />
                { error_for(ContactFormField::Name) }
            </div>
            <div class={field_class(ContactFormField::Email)}>
                <input type="email" name="email" placeholder="Email address *" required=true
                    value={message.email.clone()}
                    oninput={on_input(ContactFormField::Email)}
                    onblur={on_blur(ContactFormField::Email)} />
                { error_for(ContactFormField::Email) }
            </div>
            <div class={field_class(ContactFormField::Phone)}>
                <input type="tel" name="phone" placeholder="Phone number"
                    value={message.phone.clone()}
                    oninput={on_input(ContactFormField::Phone)}
                    onblur={on_blur(ContactFormField::Phone)} />
            </div>
            <div class="form-group">
                <select name="service" onchange={on_service}>
                    <option value="" selected={message.service.is_empty()}>{"Service of interest"}</option>
                    { for ["Armed Response", "Guarding", "CCTV Monitoring", "Risk Assessment", "Other"]
                        .iter()
                        .map(|service| html! {
                            <option value={*service} selected={message.service == *service}>{*service}</option>
                        }) }
                </select>
            </div>
            <div class={field_class(ContactFormField::Message)}>
                <textarea name="message" placeholder="How can we help? *" required=true
                    value={message.message.clone()}
                    oninput={on_input(ContactFormField::Message)}
                    onblur={on_blur(ContactFormField::Message)} />
                { error_for(ContactFormField::Message) }
            </div>
            <button type="submit" class="btn-submit">
                <i class="fas fa-paper-plane"></i>{" Send Message"}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::{MockNotifier, NotificationKind};
    use crate::mail::MockMailHandler;
    use chrono::NaiveDate;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Thandi".to_string(),
            email: "thandi@example.com".to_string(),
            phone: String::new(),
            service: "Guarding".to_string(),
            message: "Need night cover for a warehouse.".to_string(),
        }
    }

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn required_fields_and_email_shape() {
        assert_eq!(field_error(ContactFormField::Name, "  "), Some(REQUIRED));
        assert_eq!(field_error(ContactFormField::Phone, ""), None);
        assert_eq!(field_error(ContactFormField::Email, "thandi@"), Some(INVALID_EMAIL));
        assert_eq!(field_error(ContactFormField::Email, "t@e.co"), None);
    }

    #[test]
    fn empty_form_flags_every_required_field() {
        let errors = form_errors(&ContactMessage::default());
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![
                ContactFormField::Name,
                ContactFormField::Email,
                ContactFormField::Message
            ]
        );
        assert!(form_errors(&filled()).is_empty());
    }

    #[test]
    fn contact_email_layout() {
        let draft = compose_contact_email(&filled(), at());
        assert_eq!(draft.subject, "Contact Form Submission - Thandi");
        assert!(draft.body.contains("Phone: -\n"));
        assert!(draft.body.contains("Service Interest: Guarding\n"));
        assert!(draft.body.contains("MESSAGE:\nNeed night cover for a warehouse."));
    }

    #[test]
    fn successful_send_notifies_success() {
        let mut handler = MockMailHandler::new();
        handler.expect_open().times(1).returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.kind == NotificationKind::Success)
            .times(1)
            .return_const(());
        assert!(send_contact_message(&filled(), &handler, &notifier, at()).is_ok());
    }

    #[test]
    fn failed_send_asks_the_user_to_call() {
        let mut handler = MockMailHandler::new();
        handler
            .expect_open()
            .returning(|_| Err(SubmissionError::MissingElement("body")));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.kind == NotificationKind::Error && n.message.contains("calling us directly"))
            .times(1)
            .return_const(());
        assert!(send_contact_message(&filled(), &handler, &notifier, at()).is_err());
    }
}
