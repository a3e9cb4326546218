use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::state::{parse_input_date, BookingService, BookingStep, FieldEdit, TIME_SLOTS};
use super::submission::{BookingPayload, MailtoBookingSubmitter};
use super::validation::ContactField;
use super::wizard::{BookingWizard, SystemClock, WizardError};
use crate::components::notification::Notification;
use crate::config;
use crate::mail::BrowserMailHandler;

pub fn step_class(step: BookingStep, current: BookingStep) -> &'static str {
    if step == current {
        "booking-step active"
    } else {
        "booking-step"
    }
}

pub fn progress_class(step: BookingStep, current: BookingStep) -> &'static str {
    if step == current {
        "progress-step active"
    } else if step < current {
        "progress-step completed"
    } else {
        "progress-step"
    }
}

/// Contact inputs to outline after a blocked step.
pub fn highlighted_fields(error: &WizardError) -> Vec<ContactField> {
    match error {
        WizardError::Validation(err) => err.offending_fields(),
        _ => Vec::new(),
    }
}

pub fn input_class(field: ContactField, highlighted: &[ContactField]) -> Option<&'static str> {
    highlighted.contains(&field).then(|| "input-error")
}

fn submitted_at() -> NaiveDateTime {
    Local::now().naive_local()
}

pub enum BookingMsg {
    Edit(FieldEdit),
    Next,
    Previous,
    Submit,
    Dispatch,
    ClearHighlight,
    Close,
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub on_close: Callback<()>,
    pub on_booked: Callback<BookingPayload>,
    pub on_notify: Callback<Notification>,
}

/// The booking dialog. It is mounted when the dialog opens and unmounted when
/// it closes, which gives every session a fresh [`BookingWizard`] and drops any
/// pending submit timer with it.
pub struct BookingModal {
    wizard: BookingWizard,
    pending: Option<Timeout>,
    highlighted: Vec<ContactField>,
    highlight_timer: Option<Timeout>,
}

impl Component for BookingModal {
    type Message = BookingMsg;
    type Properties = BookingModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let submitter = MailtoBookingSubmitter::new(Rc::new(BrowserMailHandler), submitted_at);
        Self {
            wizard: BookingWizard::new(
                Rc::new(submitter),
                Rc::new(ctx.props().on_notify.clone()),
                Rc::new(SystemClock),
            ),
            pending: None,
            highlighted: Vec::new(),
            highlight_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookingMsg::Edit(edit) => {
                self.wizard.edit(edit);
                true
            }
            BookingMsg::Next => match self.wizard.advance() {
                Ok(_) => {
                    self.clear_highlight();
                    true
                }
                Err(err) => self.highlight(ctx, highlighted_fields(&err)),
            },
            BookingMsg::Previous => self.wizard.retreat().is_ok(),
            BookingMsg::Submit => {
                if self.pending.is_some() || self.wizard.begin_submit().is_err() {
                    return false;
                }
                let link = ctx.link().clone();
                self.pending = Some(Timeout::new(config::SUBMIT_DELAY_MS, move || {
                    link.send_message(BookingMsg::Dispatch);
                }));
                true
            }
            BookingMsg::Dispatch => {
                self.pending = None;
                if let Ok(payload) = self.wizard.submit() {
                    ctx.props().on_booked.emit(payload);
                }
                true
            }
            BookingMsg::ClearHighlight => {
                self.highlight_timer = None;
                !std::mem::take(&mut self.highlighted).is_empty()
            }
            BookingMsg::Close => {
                self.pending = None;
                self.clear_highlight();
                self.wizard.reset();
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let current = self.wizard.step();
        let close = link.callback(|e: MouseEvent| {
            e.prevent_default();
            BookingMsg::Close
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            BookingMsg::Submit
        });

        html! {
            <div class="modal active" id="bookingModal">
                <div class="modal-overlay" onclick={close.clone()}></div>
                <div class="modal-content booking-modal">
                    <button class="modal-close" onclick={close}>{"×"}</button>
                    <h3>{"Book a Security Consultation"}</h3>
                    <div class="booking-progress">
                        { for BookingStep::ALL.iter().map(|step| html! {
                            <div class={progress_class(*step, current)}>
                                <span class="step-number">{step.number().to_string()}</span>
                                <span class="step-label">{step.title()}</span>
                            </div>
                        }) }
                    </div>
                    <form id="bookingForm" {onsubmit}>
                        { self.view_service_step(link, current) }
                        { self.view_contact_step(link, current) }
                        { self.view_schedule_step(link, current) }
                        { self.view_review_step(link, current) }
                        { self.view_navigation(link) }
                    </form>
                </div>
            </div>
        }
    }
}

fn text_edit(link: &Scope<BookingModal>, edit: fn(String) -> FieldEdit) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        BookingMsg::Edit(edit(input.value()))
    })
}

fn date_edit(
    link: &Scope<BookingModal>,
    edit: fn(Option<chrono::NaiveDate>) -> FieldEdit,
) -> Callback<Event> {
    link.callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        BookingMsg::Edit(edit(parse_input_date(&input.value())))
    })
}

impl BookingModal {
    // Outlines the fields for a few seconds; a newer failure restarts the timer.
    fn highlight(&mut self, ctx: &Context<Self>, fields: Vec<ContactField>) -> bool {
        if fields.is_empty() {
            return false;
        }
        self.highlighted = fields;
        let link = ctx.link().clone();
        self.highlight_timer = Some(Timeout::new(config::FIELD_HIGHLIGHT_MS, move || {
            link.send_message(BookingMsg::ClearHighlight);
        }));
        true
    }

    fn clear_highlight(&mut self) {
        self.highlight_timer = None;
        self.highlighted.clear();
    }

    fn view_service_step(&self, link: &Scope<Self>, current: BookingStep) -> Html {
        let chosen = self.wizard.selections().service;
        html! {
            <div class={step_class(BookingStep::Service, current)} data-step="1">
                <h4>{"Choose a service"}</h4>
                <div class="service-options">
                    { for BookingService::ALL.iter().map(|service| {
                        let service = *service;
                        let onchange = link.callback(move |_: Event| {
                            BookingMsg::Edit(FieldEdit::Service(service))
                        });
                        let selected = chosen == Some(service);
                        html! {
                            <label class={classes!("service-option", selected.then(|| "selected"))}>
                                <input type="radio" name="bookingService" value={service.id()}
                                    checked={selected} {onchange} />
                                <h5>{service.label()}</h5>
                                <p>{service.description()}</p>
                                <span class="duration">{service.duration()}</span>
                            </label>
                        }
                    }) }
                </div>
            </div>
        }
    }

    fn view_contact_step(&self, link: &Scope<Self>, current: BookingStep) -> Html {
        let selections = self.wizard.selections();
        let marked = |field| input_class(field, &self.highlighted);
        let requirements = link.callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            BookingMsg::Edit(FieldEdit::Requirements(input.value()))
        });
        html! {
            <div class={step_class(BookingStep::Contact, current)} data-step="2">
                <h4>{"Your details"}</h4>
                <div class="form-grid">
                    <input id="bookingName" class={classes!(marked(ContactField::Name))} type="text" placeholder="Full name *"
                        value={selections.name.clone()} oninput={text_edit(link, FieldEdit::Name)} />
                    <input id="bookingCompany" type="text" placeholder="Company"
                        value={selections.company.clone()} oninput={text_edit(link, FieldEdit::Company)} />
                    <input id="bookingEmail" class={classes!(marked(ContactField::Email))} type="email" placeholder="Email address *"
                        value={selections.email.clone()} oninput={text_edit(link, FieldEdit::Email)} />
                    <input id="bookingPhone" class={classes!(marked(ContactField::Phone))} type="tel" placeholder="Phone number *"
                        value={selections.phone.clone()} oninput={text_edit(link, FieldEdit::Phone)} />
                    <input id="bookingLocation" class={classes!(marked(ContactField::Location))} type="text" placeholder="Site location *"
                        value={selections.location.clone()} oninput={text_edit(link, FieldEdit::Location)} />
                    <textarea id="bookingRequirements" placeholder="Tell us about your requirements"
                        value={selections.requirements.clone()} oninput={requirements} />
                </div>
            </div>
        }
    }

    fn view_schedule_step(&self, link: &Scope<Self>, current: BookingStep) -> Html {
        let selections = self.wizard.selections();
        let min = self.wizard.min_date().format("%Y-%m-%d").to_string();
        let date_value = |date: Option<chrono::NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
        };
        html! {
            <div class={step_class(BookingStep::Schedule, current)} data-step="3">
                <h4>{"Pick a time"}</h4>
                <label for="bookingDate">{"Preferred date *"}</label>
                <input id="bookingDate" type="date" min={min.clone()}
                    value={date_value(selections.date)} onchange={date_edit(link, FieldEdit::Date)} />
                <div class="time-slots">
                    { for TIME_SLOTS.iter().map(|slot| {
                        let value = slot.to_string();
                        let onchange = link.callback(move |_: Event| {
                            BookingMsg::Edit(FieldEdit::Time(value.clone()))
                        });
                        html! {
                            <label class="time-slot">
                                <input type="radio" name="bookingTime" value={*slot}
                                    checked={selections.time.as_deref() == Some(*slot)} {onchange} />
                                <span>{*slot}</span>
                            </label>
                        }
                    }) }
                </div>
                <label for="alternativeDate">{"Alternative date"}</label>
                <input id="alternativeDate" type="date" {min}
                    value={date_value(selections.alternative_date)}
                    onchange={date_edit(link, FieldEdit::AlternativeDate)} />
            </div>
        }
    }

    fn view_review_step(&self, link: &Scope<Self>, current: BookingStep) -> Html {
        let summary = self.wizard.summary();
        let terms = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            BookingMsg::Edit(FieldEdit::TermsAccepted(input.checked()))
        });
        html! {
            <div class={step_class(BookingStep::Review, current)} data-step="4">
                <h4>{"Confirm your booking"}</h4>
                <div class="booking-summary">
                    <div class="summary-section">
                        <h5>{"Service"}</h5>
                        <p id="summaryService">{summary.service}</p>
                        <p id="summaryDuration">{summary.duration}</p>
                    </div>
                    <div class="summary-section">
                        <h5>{"Contact"}</h5>
                        <p id="summaryName">{summary.name}</p>
                        <p id="summaryEmail">{summary.email}</p>
                        <p id="summaryPhone">{summary.phone}</p>
                        <p id="summaryLocation">{summary.location}</p>
                    </div>
                    <div class="summary-section">
                        <h5>{"Appointment"}</h5>
                        <p id="summaryDate">{summary.date}</p>
                        <p id="summaryTime">{summary.time}</p>
                        if let Some(alternative) = summary.alternative_date {
                            <p id="summaryAlternative">{format!("Alternative: {}", alternative)}</p>
                        }
                    </div>
                </div>
                <label class="terms">
                    <input id="agreeTerms" type="checkbox"
                        checked={self.wizard.selections().terms_accepted} onchange={terms} />
                    {" I agree to the terms and conditions"}
                </label>
            </div>
        }
    }

    fn view_navigation(&self, link: &Scope<Self>) -> Html {
        let previous = link.callback(|e: MouseEvent| {
            e.prevent_default();
            BookingMsg::Previous
        });
        let next = link.callback(|e: MouseEvent| {
            e.prevent_default();
            BookingMsg::Next
        });
        let submitting = self.wizard.is_submitting();
        html! {
            <div class="booking-navigation">
                // Hidden while a submit is pending.
                if self.wizard.can_retreat() {
                    <button type="button" class="prev-btn" onclick={previous}>{"Previous"}</button>
                }
                if self.wizard.can_advance() {
                    <button type="button" class="next-btn" onclick={next}>{"Next"}</button>
                } else {
                    <button type="submit" class="submit-btn" disabled={submitting}>
                        if submitting {
                            <i class="fas fa-spinner fa-spin"></i>{" Processing..."}
                        } else {
                            {"Confirm Booking"}
                        }
                    </button>
                }
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub on_close: Callback<()>,
}

const CONFETTI_COLORS: [&str; 4] = ["#D0B96D", "#E74C3C", "#27AE60", "#3498DB"];
const CONFETTI_COUNT: usize = 50;
const CONFETTI_LIFETIME_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_percent: f64,
    pub color: &'static str,
    pub delay_ms: u32,
}

/// Evenly scattered pieces across the viewport width.
pub fn confetti_pieces(count: usize) -> Vec<ConfettiPiece> {
    const GOLDEN: f64 = 0.618_033_988_749_895;
    (0..count)
        .map(|i| ConfettiPiece {
            left_percent: ((i as f64 * GOLDEN).fract() * 10_000.0).floor() / 100.0,
            color: CONFETTI_COLORS[i % CONFETTI_COLORS.len()],
            delay_ms: (i as u32 % 10) * 40,
        })
        .collect()
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let confetti = use_state(|| true);
    {
        let confetti = confetti.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(CONFETTI_LIFETIME_MS, move || confetti.set(false));
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="modal active" id="successModal">
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content success-modal">
                <i class="fas fa-check-circle success-icon"></i>
                <h3>{"Booking Request Sent"}</h3>
                <p>{"Your email client has opened with your booking details. We'll confirm your appointment within one business day."}</p>
                <button class="btn-primary" onclick={close}>{"Close"}</button>
            </div>
            if *confetti {
                { for confetti_pieces(CONFETTI_COUNT).into_iter().map(|piece| html! {
                    <div class="confetti-piece" style={format!(
                        "left: {}%; background: {}; animation-delay: {}ms;",
                        piece.left_percent, piece.color, piece.delay_ms
                    )}></div>
                }) }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::validation::ValidationError;
    use crate::mail::SubmissionError;

    #[test]
    fn blocked_contact_step_outlines_offending_inputs() {
        let missing = WizardError::Validation(ValidationError::MissingFields(vec![
            ContactField::Name,
            ContactField::Location,
        ]));
        let fields = highlighted_fields(&missing);
        assert_eq!(input_class(ContactField::Name, &fields), Some("input-error"));
        assert_eq!(input_class(ContactField::Email, &fields), None);
        assert_eq!(input_class(ContactField::Location, &fields), Some("input-error"));

        let email = WizardError::Validation(ValidationError::InvalidEmail);
        assert_eq!(highlighted_fields(&email), vec![ContactField::Email]);
    }

    #[test]
    fn other_failures_outline_nothing() {
        assert!(highlighted_fields(&WizardError::Validation(ValidationError::MissingTime)).is_empty());
        assert!(highlighted_fields(&WizardError::Submission(SubmissionError::Incomplete("date"))).is_empty());
        assert!(highlighted_fields(&WizardError::Unavailable {
            action: "next",
            step: 4
        })
        .is_empty());
    }

    #[test]
    fn only_the_current_step_is_active() {
        let active: Vec<&str> = BookingStep::ALL
            .iter()
            .map(|step| step_class(*step, BookingStep::Schedule))
            .collect();
        assert_eq!(
            active,
            vec!["booking-step", "booking-step", "booking-step active", "booking-step"]
        );
    }

    #[test]
    fn progress_marks_earlier_steps_completed() {
        let classes: Vec<&str> = BookingStep::ALL
            .iter()
            .map(|step| progress_class(*step, BookingStep::Schedule))
            .collect();
        assert_eq!(
            classes,
            vec![
                "progress-step completed",
                "progress-step completed",
                "progress-step active",
                "progress-step"
            ]
        );
    }

    #[test]
    fn confetti_stays_on_screen_and_cycles_colours() {
        let pieces = confetti_pieces(CONFETTI_COUNT);
        assert_eq!(pieces.len(), 50);
        assert!(pieces
            .iter()
            .all(|p| (0.0..100.0).contains(&p.left_percent)));
        assert_eq!(pieces[0].color, pieces[4].color);
        assert_ne!(pieces[0].color, pieces[1].color);
    }
}
