use std::rc::Rc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use log::{debug, error, info, warn};
use thiserror::Error;

use super::state::{BookingState, BookingStep, FieldEdit, Selections};
use super::submission::{BookingPayload, BookingSubmitter};
use super::summary::{format_timestamp, BookingSummary};
use super::validation::{validate_step, ValidationError};
use crate::components::notification::{Notification, Notifier};
use crate::config;
use crate::mail::SubmissionError;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error("{action} is not available on step {step}")]
    Unavailable { action: &'static str, step: u8 },
}

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Drives one booking session, from the first step to a submitted request.
///
/// A controller is created each time the booking modal opens and dropped when
/// it closes, so nothing entered in one session leaks into the next. Every
/// user-facing outcome goes through the injected [`Notifier`]; the actual
/// hand-off of a finished booking goes through the [`BookingSubmitter`].
pub struct BookingWizard {
    state: BookingState,
    submitting: bool,
    submitter: Rc<dyn BookingSubmitter>,
    notifier: Rc<dyn Notifier>,
    clock: Rc<dyn Clock>,
}

impl BookingWizard {
    pub fn new(
        submitter: Rc<dyn BookingSubmitter>,
        notifier: Rc<dyn Notifier>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            state: BookingState::default(),
            submitting: false,
            submitter,
            notifier,
            clock,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.state.step
    }

    pub fn selections(&self) -> &Selections {
        &self.state.selections
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        self.state.selections.apply(edit);
    }

    pub fn can_advance(&self) -> bool {
        self.state.step.next().is_some()
    }

    /// Going back is locked while a submit is pending.
    pub fn can_retreat(&self) -> bool {
        !self.submitting && self.state.step.previous().is_some()
    }

    /// Earliest date a booking may be made for.
    pub fn min_date(&self) -> NaiveDate {
        let today = self.clock.today();
        today.succ_opt().unwrap_or(today)
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary::from_selections(&self.state.selections)
    }

    fn check_current_step(&self) -> Result<(), ValidationError> {
        validate_step(self.state.step, &self.state.selections, self.clock.today()).map_err(
            |err| {
                warn!("Booking step {} blocked: {}", self.state.step.number(), err);
                self.notifier.notify(Notification::warning(err.to_string()));
                err
            },
        )
    }

    pub fn advance(&mut self) -> Result<BookingStep, WizardError> {
        let next = self.state.step.next().ok_or(WizardError::Unavailable {
            action: "next",
            step: self.state.step.number(),
        })?;
        self.check_current_step()?;
        debug!("Booking step {} -> {}", self.state.step.number(), next.number());
        self.state.step = next;
        Ok(next)
    }

    pub fn retreat(&mut self) -> Result<BookingStep, WizardError> {
        let unavailable = WizardError::Unavailable {
            action: "previous",
            step: self.state.step.number(),
        };
        if self.submitting {
            return Err(unavailable);
        }
        let previous = self.state.step.previous().ok_or(unavailable)?;
        debug!("Booking step {} -> {}", self.state.step.number(), previous.number());
        self.state.step = previous;
        Ok(previous)
    }

    fn ensure_review(&self) -> Result<(), WizardError> {
        if self.state.step == BookingStep::Review {
            Ok(())
        } else {
            Err(WizardError::Unavailable {
                action: "submit",
                step: self.state.step.number(),
            })
        }
    }

    /// Validates the review step and locks the submit control until
    /// [`BookingWizard::submit`] settles.
    pub fn begin_submit(&mut self) -> Result<(), WizardError> {
        self.ensure_review()?;
        self.check_current_step()?;
        self.submitting = true;
        Ok(())
    }

    /// Hands the booking to the submitter. The submit control is unlocked
    /// again whatever the outcome.
    pub fn submit(&mut self) -> Result<BookingPayload, WizardError> {
        let outcome = self.dispatch();
        self.submitting = false;
        outcome
    }

    fn dispatch(&mut self) -> Result<BookingPayload, WizardError> {
        self.ensure_review()?;
        self.check_current_step()?;

        let outcome = self
            .payload()
            .and_then(|payload| self.submitter.submit(&payload).map(|()| payload));

        match outcome {
            Ok(payload) => {
                info!("Booking request for {} dispatched", payload.service.id());
                self.notifier.notify(Notification::success(
                    "Thank you! Your booking request has been prepared in your email client.",
                ));
                self.reset();
                Ok(payload)
            }
            Err(err) => {
                error!("Booking submission failed: {}", err);
                self.notifier.notify(Notification::error(format!(
                    "There was an error submitting your booking. Please try calling us directly on {}.",
                    config::CONTACT_PHONE
                )));
                Err(err.into())
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = BookingState::default();
        self.submitting = false;
    }

    fn payload(&self) -> Result<BookingPayload, SubmissionError> {
        let selections = &self.state.selections;
        let optional = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Ok(BookingPayload {
            service: selections
                .service
                .ok_or(SubmissionError::Incomplete("service"))?,
            name: selections.name.trim().to_string(),
            company: optional(&selections.company),
            email: selections.email.trim().to_string(),
            phone: selections.phone.trim().to_string(),
            location: selections.location.trim().to_string(),
            requirements: optional(&selections.requirements),
            date: selections.date.ok_or(SubmissionError::Incomplete("date"))?,
            time: selections
                .time
                .clone()
                .ok_or(SubmissionError::Incomplete("time"))?,
            alternative_date: selections.alternative_date,
            timestamp: format_timestamp(self.clock.now()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::state::BookingService;
    use crate::booking::submission::MockBookingSubmitter;
    use crate::components::notification::{MockNotifier, NotificationKind};
    use chrono::TimeZone;
    use std::cell::RefCell;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    fn fixed_clock() -> Rc<dyn Clock> {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2025, 3, 9, 8, 30, 0).unwrap());
        clock.expect_today().returning(today);
        Rc::new(clock)
    }

    /// Keeps every notification so tests can count them.
    #[derive(Default)]
    struct Recorder(RefCell<Vec<Notification>>);

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    fn accepting_submitter() -> Rc<dyn BookingSubmitter> {
        let mut submitter = MockBookingSubmitter::new();
        submitter.expect_submit().returning(|_| Ok(()));
        Rc::new(submitter)
    }

    fn wizard_with(submitter: Rc<dyn BookingSubmitter>) -> (BookingWizard, Rc<Recorder>) {
        let recorder = Rc::new(Recorder::default());
        let wizard = BookingWizard::new(submitter, recorder.clone(), fixed_clock());
        (wizard, recorder)
    }

    fn fill_step(wizard: &mut BookingWizard, step: BookingStep) {
        match step {
            BookingStep::Service => wizard.edit(FieldEdit::Service(BookingService::Consultation)),
            BookingStep::Contact => {
                wizard.edit(FieldEdit::Name("J. Dlamini".to_string()));
                wizard.edit(FieldEdit::Email("j@example.com".to_string()));
                wizard.edit(FieldEdit::Phone("0821234567".to_string()));
                wizard.edit(FieldEdit::Location("Bethal".to_string()));
            }
            BookingStep::Schedule => {
                wizard.edit(FieldEdit::Date(today().succ_opt()));
                wizard.edit(FieldEdit::Time("09:00–11:00".to_string()));
            }
            BookingStep::Review => wizard.edit(FieldEdit::TermsAccepted(true)),
        }
    }

    fn wizard_at(step: BookingStep) -> (BookingWizard, Rc<Recorder>) {
        let (mut wizard, recorder) = wizard_with(accepting_submitter());
        while wizard.step() != step {
            let current = wizard.step();
            fill_step(&mut wizard, current);
            wizard.advance().unwrap();
        }
        (wizard, recorder)
    }

    #[test]
    fn starts_on_the_service_step() {
        let (wizard, recorder) = wizard_with(accepting_submitter());
        assert_eq!(wizard.step(), BookingStep::Service);
        assert_eq!(wizard.selections(), &Selections::default());
        assert!(!wizard.can_retreat());
        assert!(wizard.can_advance());
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn failed_validation_blocks_with_one_warning() {
        for step in [BookingStep::Service, BookingStep::Contact, BookingStep::Schedule] {
            let (mut wizard, recorder) = wizard_at(step);
            let result = wizard.advance();
            assert!(matches!(result, Err(WizardError::Validation(_))));
            assert_eq!(wizard.step(), step);
            let notes = recorder.0.borrow();
            assert_eq!(notes.len(), 1, "step {:?}", step);
            assert_eq!(notes[0].kind, NotificationKind::Warning);
        }
    }

    #[test]
    fn blocked_submit_on_review_warns_once() {
        let (mut wizard, recorder) = wizard_at(BookingStep::Review);
        let result = wizard.submit();
        assert_eq!(
            result,
            Err(WizardError::Validation(ValidationError::TermsNotAccepted))
        );
        assert_eq!(wizard.step(), BookingStep::Review);
        let notes = recorder.0.borrow();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, "Please agree to the terms and conditions.");
    }

    #[test]
    fn valid_steps_advance_by_exactly_one() {
        let (mut wizard, recorder) = wizard_with(accepting_submitter());
        for expected in [BookingStep::Contact, BookingStep::Schedule, BookingStep::Review] {
            let before = wizard.step().number();
            let current = wizard.step();
            fill_step(&mut wizard, current);
            assert_eq!(wizard.advance(), Ok(expected));
            assert_eq!(wizard.step().number(), before + 1);
        }
        assert!(!wizard.can_advance());
        assert_eq!(
            wizard.advance(),
            Err(WizardError::Unavailable {
                action: "next",
                step: 4
            })
        );
        assert_eq!(wizard.step(), BookingStep::Review);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn retreat_ignores_validation() {
        let (mut wizard, recorder) = wizard_at(BookingStep::Review);
        wizard.edit(FieldEdit::Email(String::new()));
        wizard.edit(FieldEdit::Date(None));
        assert_eq!(wizard.retreat(), Ok(BookingStep::Schedule));
        assert_eq!(wizard.retreat(), Ok(BookingStep::Contact));
        assert_eq!(wizard.retreat(), Ok(BookingStep::Service));
        assert!(matches!(
            wizard.retreat(),
            Err(WizardError::Unavailable { step: 1, .. })
        ));
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn submit_is_only_offered_on_review() {
        let (mut wizard, _) = wizard_at(BookingStep::Schedule);
        assert!(matches!(
            wizard.submit(),
            Err(WizardError::Unavailable {
                action: "submit",
                step: 3
            })
        ));
        assert!(matches!(
            wizard.begin_submit(),
            Err(WizardError::Unavailable { .. })
        ));
    }

    #[test]
    fn successful_submit_resets_the_session() {
        let mut submitter = MockBookingSubmitter::new();
        submitter
            .expect_submit()
            .withf(|payload| {
                payload.service == BookingService::Consultation
                    && payload.name == "J. Dlamini"
                    && payload.time == "09:00–11:00"
                    && payload.company.is_none()
                    && payload.timestamp == "2025-03-09T08:30:00.000Z"
            })
            .times(1)
            .returning(|_| Ok(()));
        let (mut wizard, recorder) = wizard_with(Rc::new(submitter));
        while wizard.step() != BookingStep::Review {
            let current = wizard.step();
            fill_step(&mut wizard, current);
            wizard.advance().unwrap();
        }
        fill_step(&mut wizard, BookingStep::Review);

        wizard.begin_submit().unwrap();
        assert!(wizard.is_submitting());
        let payload = wizard.submit().unwrap();

        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
        assert_eq!(wizard.step(), BookingStep::Service);
        assert_eq!(wizard.selections(), &Selections::default());
        assert!(!wizard.is_submitting());
        let notes = recorder.0.borrow();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Success);
    }

    #[test]
    fn failed_dispatch_keeps_entered_data() {
        let mut submitter = MockBookingSubmitter::new();
        submitter
            .expect_submit()
            .returning(|_| Err(SubmissionError::MissingElement("body")));
        let (mut wizard, recorder) = wizard_with(Rc::new(submitter));
        while wizard.step() != BookingStep::Review {
            let current = wizard.step();
            fill_step(&mut wizard, current);
            wizard.advance().unwrap();
        }
        fill_step(&mut wizard, BookingStep::Review);
        wizard.begin_submit().unwrap();

        let result = wizard.submit();

        assert_eq!(
            result,
            Err(WizardError::Submission(SubmissionError::MissingElement(
                "body"
            )))
        );
        assert_eq!(wizard.step(), BookingStep::Review);
        assert_eq!(wizard.selections().name, "J. Dlamini");
        assert!(!wizard.is_submitting());
        let notes = recorder.0.borrow();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert!(notes[0].message.contains("calling us directly"));
    }

    #[test]
    fn notifier_mock_sees_a_single_warning() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|n| n.kind == NotificationKind::Warning && n.message == "Please select a service.")
            .times(1)
            .return_const(());
        let mut wizard =
            BookingWizard::new(accepting_submitter(), Rc::new(notifier), fixed_clock());
        assert!(wizard.advance().is_err());
    }

    #[test]
    fn min_date_is_tomorrow() {
        let (wizard, _) = wizard_with(accepting_submitter());
        assert_eq!(wizard.min_date(), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn summary_tracks_edits() {
        let (mut wizard, _) = wizard_at(BookingStep::Review);
        wizard.edit(FieldEdit::Date(NaiveDate::from_ymd_opt(2025, 3, 10)));
        assert_eq!(wizard.summary().date, "Monday, March 10, 2025");
        assert_eq!(wizard.summary(), wizard.summary());
    }

    #[test]
    fn pending_submit_locks_going_back() {
        let (mut wizard, recorder) = wizard_at(BookingStep::Review);
        fill_step(&mut wizard, BookingStep::Review);
        wizard.begin_submit().unwrap();

        assert!(!wizard.can_retreat());
        assert_eq!(
            wizard.retreat(),
            Err(WizardError::Unavailable {
                action: "previous",
                step: 4
            })
        );
        assert_eq!(wizard.step(), BookingStep::Review);

        assert!(wizard.submit().is_ok());
        assert!(!wizard.is_submitting());
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn submit_unlocks_even_when_it_cannot_run() {
        let (mut wizard, _) = wizard_at(BookingStep::Review);
        fill_step(&mut wizard, BookingStep::Review);
        wizard.begin_submit().unwrap();
        // Terms withdrawn during the delay.
        wizard.edit(FieldEdit::TermsAccepted(false));

        assert!(matches!(wizard.submit(), Err(WizardError::Validation(_))));
        assert!(!wizard.is_submitting());
        assert!(wizard.can_retreat());

        wizard.begin_submit().unwrap_err();
        wizard.edit(FieldEdit::TermsAccepted(true));
        wizard.begin_submit().unwrap();
        assert!(wizard.is_submitting());
    }
}
