use chrono::NaiveDate;
use serde::Serialize;

pub const TIME_SLOTS: [&str; 5] = [
    "08:00–10:00",
    "09:00–11:00",
    "11:00–13:00",
    "13:00–15:00",
    "15:00–17:00",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingStep {
    Service = 1,
    Contact = 2,
    Schedule = 3,
    Review = 4,
}

impl BookingStep {
    pub const ALL: [BookingStep; 4] = [
        BookingStep::Service,
        BookingStep::Contact,
        BookingStep::Schedule,
        BookingStep::Review,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<BookingStep> {
        match self {
            BookingStep::Service => Some(BookingStep::Contact),
            BookingStep::Contact => Some(BookingStep::Schedule),
            BookingStep::Schedule => Some(BookingStep::Review),
            BookingStep::Review => None,
        }
    }

    pub fn previous(self) -> Option<BookingStep> {
        match self {
            BookingStep::Service => None,
            BookingStep::Contact => Some(BookingStep::Service),
            BookingStep::Schedule => Some(BookingStep::Contact),
            BookingStep::Review => Some(BookingStep::Schedule),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BookingStep::Service => "Service",
            BookingStep::Contact => "Details",
            BookingStep::Schedule => "Schedule",
            BookingStep::Review => "Confirm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingService {
    SecurityAssessment,
    Consultation,
    QuoteMeeting,
    EmergencyPlanning,
}

impl BookingService {
    pub const ALL: [BookingService; 4] = [
        BookingService::SecurityAssessment,
        BookingService::Consultation,
        BookingService::QuoteMeeting,
        BookingService::EmergencyPlanning,
    ];

    /// Value carried by the radio input and the submitted payload.
    pub fn id(self) -> &'static str {
        match self {
            BookingService::SecurityAssessment => "security-assessment",
            BookingService::Consultation => "consultation",
            BookingService::QuoteMeeting => "quote-meeting",
            BookingService::EmergencyPlanning => "emergency-planning",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingService::SecurityAssessment => "Security Assessment",
            BookingService::Consultation => "Security Consultation",
            BookingService::QuoteMeeting => "Quote & Proposal Meeting",
            BookingService::EmergencyPlanning => "Emergency Planning Session",
        }
    }

    pub fn duration(self) -> &'static str {
        match self {
            BookingService::SecurityAssessment => "2-3 hours",
            BookingService::Consultation => "1 hour",
            BookingService::QuoteMeeting => "45 minutes",
            BookingService::EmergencyPlanning => "2 hours",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BookingService::SecurityAssessment => {
                "On-site risk review of your premises with a written report."
            }
            BookingService::Consultation => "Talk through your security needs with a specialist.",
            BookingService::QuoteMeeting => "Walk through a tailored proposal and pricing.",
            BookingService::EmergencyPlanning => {
                "Build evacuation and incident response plans for your team."
            }
        }
    }
}

/// Latest value the user entered for every booking field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selections {
    pub service: Option<BookingService>,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub requirements: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub alternative_date: Option<NaiveDate>,
    pub terms_accepted: bool,
}

/// One user input event against the booking form.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEdit {
    Service(BookingService),
    Name(String),
    Company(String),
    Email(String),
    Phone(String),
    Location(String),
    Requirements(String),
    Date(Option<NaiveDate>),
    Time(String),
    AlternativeDate(Option<NaiveDate>),
    TermsAccepted(bool),
}

impl Selections {
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Service(service) => self.service = Some(service),
            FieldEdit::Name(value) => self.name = value,
            FieldEdit::Company(value) => self.company = value,
            FieldEdit::Email(value) => self.email = value,
            FieldEdit::Phone(value) => self.phone = value,
            FieldEdit::Location(value) => self.location = value,
            FieldEdit::Requirements(value) => self.requirements = value,
            FieldEdit::Date(date) => self.date = date,
            FieldEdit::Time(slot) => self.time = Some(slot).filter(|s| !s.is_empty()),
            FieldEdit::AlternativeDate(date) => self.alternative_date = date,
            FieldEdit::TermsAccepted(accepted) => self.terms_accepted = accepted,
        }
    }
}

/// Date inputs report `YYYY-MM-DD`; anything else counts as no date.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingState {
    pub step: BookingStep,
    pub selections: Selections,
}

impl Default for BookingStep {
    fn default() -> Self {
        BookingStep::Service
    }
}
