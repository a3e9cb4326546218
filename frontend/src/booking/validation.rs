use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::state::{BookingStep, Selections};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Location,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Full name",
            ContactField::Email => "Email address",
            ContactField::Phone => "Phone number",
            ContactField::Location => "Site location",
        }
    }
}

fn field_list(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a service.")]
    NoService,
    #[error("Please fill in all required fields: {}.", field_list(.0))]
    MissingFields(Vec<ContactField>),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select a preferred date.")]
    MissingDate,
    #[error("Please choose a preferred date from tomorrow onwards.")]
    DateTooEarly,
    #[error("Please select a preferred time slot.")]
    MissingTime,
    #[error("Please choose an alternative date from tomorrow onwards.")]
    AlternativeDateTooEarly,
    #[error("Please agree to the terms and conditions.")]
    TermsNotAccepted,
}

impl ValidationError {
    /// Contact fields that should be highlighted for this failure.
    pub fn offending_fields(&self) -> Vec<ContactField> {
        match self {
            ValidationError::MissingFields(fields) => fields.clone(),
            ValidationError::InvalidEmail => vec![ContactField::Email],
            _ => Vec::new(),
        }
    }
}

pub fn validate_step(
    step: BookingStep,
    selections: &Selections,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    match step {
        BookingStep::Service => validate_service(selections),
        BookingStep::Contact => validate_contact(selections),
        BookingStep::Schedule => validate_schedule(selections, today),
        BookingStep::Review => validate_terms(selections),
    }
}

fn validate_service(selections: &Selections) -> Result<(), ValidationError> {
    match selections.service {
        Some(_) => Ok(()),
        None => Err(ValidationError::NoService),
    }
}

fn validate_contact(selections: &Selections) -> Result<(), ValidationError> {
    let required = [
        (ContactField::Name, &selections.name),
        (ContactField::Email, &selections.email),
        (ContactField::Phone, &selections.phone),
        (ContactField::Location, &selections.location),
    ];
    let missing: Vec<ContactField> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if !is_valid_email(selections.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

fn validate_schedule(selections: &Selections, today: NaiveDate) -> Result<(), ValidationError> {
    let date = selections.date.ok_or(ValidationError::MissingDate)?;
    if date <= today {
        return Err(ValidationError::DateTooEarly);
    }

    let has_time = selections
        .time
        .as_deref()
        .map_or(false, |slot| !slot.trim().is_empty());
    if !has_time {
        return Err(ValidationError::MissingTime);
    }

    if let Some(alternative) = selections.alternative_date {
        if alternative <= today {
            return Err(ValidationError::AlternativeDateTooEarly);
        }
    }
    Ok(())
}

fn validate_terms(selections: &Selections) -> Result<(), ValidationError> {
    if selections.terms_accepted {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAccepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::state::BookingService;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    fn contact() -> Selections {
        Selections {
            name: "J. Dlamini".to_string(),
            email: "j@example.com".to_string(),
            phone: "0821234567".to_string(),
            location: "Bethal".to_string(),
            ..Selections::default()
        }
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn service_step_needs_a_choice() {
        let mut selections = Selections::default();
        let err = validate_step(BookingStep::Service, &selections, today()).unwrap_err();
        assert_eq!(err.to_string(), "Please select a service.");

        selections.service = Some(BookingService::Consultation);
        assert!(validate_step(BookingStep::Service, &selections, today()).is_ok());
    }

    #[test]
    fn contact_step_names_every_blank_field() {
        let selections = Selections {
            name: "   ".to_string(),
            email: "j@example.com".to_string(),
            ..Selections::default()
        };
        let err = validate_step(BookingStep::Contact, &selections, today()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec![
                ContactField::Name,
                ContactField::Phone,
                ContactField::Location
            ])
        );
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields: Full name, Phone number, Site location."
        );
    }

    #[test]
    fn contact_step_checks_email_after_presence() {
        let mut selections = contact();
        selections.email = "j@example".to_string();
        let err = validate_step(BookingStep::Contact, &selections, today()).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.offending_fields(), vec![ContactField::Email]);

        selections.email = "  j@example.com  ".to_string();
        assert!(validate_step(BookingStep::Contact, &selections, today()).is_ok());
    }

    #[test]
    fn schedule_rejects_today_and_earlier() {
        let mut selections = contact();
        selections.time = Some("09:00–11:00".to_string());

        selections.date = Some(today());
        assert_eq!(
            validate_step(BookingStep::Schedule, &selections, today()),
            Err(ValidationError::DateTooEarly)
        );
        selections.date = today().pred_opt();
        assert_eq!(
            validate_step(BookingStep::Schedule, &selections, today()),
            Err(ValidationError::DateTooEarly)
        );
        selections.date = today().succ_opt();
        assert!(validate_step(BookingStep::Schedule, &selections, today()).is_ok());
    }

    #[test]
    fn schedule_reports_missing_date_before_missing_time() {
        let mut selections = Selections::default();
        assert_eq!(
            validate_step(BookingStep::Schedule, &selections, today()),
            Err(ValidationError::MissingDate)
        );
        selections.date = today().succ_opt();
        assert_eq!(
            validate_step(BookingStep::Schedule, &selections, today()),
            Err(ValidationError::MissingTime)
        );
    }

    #[test]
    fn alternative_date_must_also_be_in_the_future() {
        let selections = Selections {
            date: today().succ_opt(),
            time: Some("11:00–13:00".to_string()),
            alternative_date: Some(today()),
            ..Selections::default()
        };
        assert_eq!(
            validate_step(BookingStep::Schedule, &selections, today()),
            Err(ValidationError::AlternativeDateTooEarly)
        );
    }

    #[test]
    fn review_needs_terms() {
        let mut selections = Selections::default();
        let err = validate_step(BookingStep::Review, &selections, today()).unwrap_err();
        assert_eq!(err.to_string(), "Please agree to the terms and conditions.");
        selections.terms_accepted = true;
        assert!(validate_step(BookingStep::Review, &selections, today()).is_ok());
    }
}
