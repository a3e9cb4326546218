use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::state::BookingService;
use super::summary::{format_local_timestamp, format_long_date};
use crate::config;
use crate::mail::{MailDraft, MailHandler, SubmissionError};

/// Everything sent for one booking request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub service: BookingService,
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub requirements: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub alternative_date: Option<NaiveDate>,
    pub timestamp: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait BookingSubmitter {
    fn submit(&self, payload: &BookingPayload) -> Result<(), SubmissionError>;
}

pub fn compose_booking_email(payload: &BookingPayload, submitted_at: NaiveDateTime) -> MailDraft {
    let mut lines = vec![
        "New Security Consultation Booking Request".to_string(),
        String::new(),
        "SERVICE DETAILS:".to_string(),
        format!("Service: {}", payload.service.label()),
        format!("Date: {}", format_long_date(payload.date)),
        format!("Time: {}", payload.time),
    ];
    if let Some(alternative) = payload.alternative_date {
        lines.push(format!("Alternative Date: {}", format_long_date(alternative)));
    }

    lines.push(String::new());
    lines.push("CONTACT INFORMATION:".to_string());
    lines.push(format!("Name: {}", payload.name));
    if let Some(company) = &payload.company {
        lines.push(format!("Company: {}", company));
    }
    lines.push(format!("Email: {}", payload.email));
    lines.push(format!("Phone: {}", payload.phone));

    lines.push(String::new());
    lines.push("LOCATION:".to_string());
    lines.push(payload.location.clone());

    if let Some(requirements) = &payload.requirements {
        lines.push(String::new());
        lines.push("REQUIREMENTS:".to_string());
        lines.push(requirements.clone());
    }

    lines.push(String::new());
    lines.push(format!("Submitted: {}", format_local_timestamp(submitted_at)));

    MailDraft {
        subject: format!("New Security Consultation Booking - {}", payload.name),
        body: lines.join("\n"),
    }
}

/// Treats a booking as sent once the mail client has been asked to open a draft.
pub struct MailtoBookingSubmitter {
    handler: Rc<dyn MailHandler>,
    submitted_at: fn() -> NaiveDateTime,
}

impl MailtoBookingSubmitter {
    pub fn new(handler: Rc<dyn MailHandler>, submitted_at: fn() -> NaiveDateTime) -> Self {
        Self {
            handler,
            submitted_at,
        }
    }
}

impl BookingSubmitter for MailtoBookingSubmitter {
    fn submit(&self, payload: &BookingPayload) -> Result<(), SubmissionError> {
        if let Ok(json) = serde_json::to_string(payload) {
            log::debug!("Booking data: {}", json);
        }
        let draft = compose_booking_email(payload, (self.submitted_at)());
        self.handler.open(&draft.to_mailto(config::BOOKING_RECIPIENT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::MockMailHandler;

    fn payload() -> BookingPayload {
        BookingPayload {
            service: BookingService::Consultation,
            name: "J. Dlamini".to_string(),
            company: None,
            email: "j@example.com".to_string(),
            phone: "0821234567".to_string(),
            location: "Bethal".to_string(),
            requirements: Some("Night patrols".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time: "09:00–11:00".to_string(),
            alternative_date: None,
            timestamp: "2025-03-09T08:30:00.000Z".to_string(),
        }
    }

    fn submitted_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn email_skips_absent_optional_lines() {
        let draft = compose_booking_email(&payload(), submitted_at());
        assert_eq!(draft.subject, "New Security Consultation Booking - J. Dlamini");
        assert!(draft.body.contains("Service: Security Consultation\n"));
        assert!(draft.body.contains("Date: Monday, March 10, 2025\n"));
        assert!(draft.body.contains("REQUIREMENTS:\nNight patrols"));
        assert!(!draft.body.contains("Company:"));
        assert!(!draft.body.contains("Alternative Date:"));
        assert!(draft.body.ends_with("Submitted: 2025/03/09, 10:30:00"));
    }

    #[test]
    fn payload_serializes_with_service_id() {
        let json = serde_json::to_value(payload()).unwrap();
        assert_eq!(json["service"], "consultation");
        assert_eq!(json["date"], "2025-03-10");
        assert_eq!(json["alternativeDate"], serde_json::Value::Null);
    }

    #[test]
    fn mailto_submitter_addresses_the_booking_inbox() {
        let mut handler = MockMailHandler::new();
        handler
            .expect_open()
            .withf(|uri| uri.starts_with("mailto:vusiz@pegholdings.co.za?subject=New%20Security"))
            .times(1)
            .returning(|_| Ok(()));
        let submitter = MailtoBookingSubmitter::new(Rc::new(handler), submitted_at);
        assert!(submitter.submit(&payload()).is_ok());
    }

    #[test]
    fn mailto_submitter_passes_handler_failures_through() {
        let mut handler = MockMailHandler::new();
        handler
            .expect_open()
            .returning(|_| Err(SubmissionError::MissingElement("body")));
        let submitter = MailtoBookingSubmitter::new(Rc::new(handler), submitted_at);
        assert_eq!(
            submitter.submit(&payload()),
            Err(SubmissionError::MissingElement("body"))
        );
    }
}
