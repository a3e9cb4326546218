use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use super::state::Selections;

const PLACEHOLDER: &str = "-";

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Machine-readable submission time, e.g. `2025-03-09T08:30:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Human-readable local submission time, e.g. `2025/03/09, 10:30:00`.
pub fn format_local_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y/%m/%d, %H:%M:%S").to_string()
}

/// Read-only view of the selections shown on the review step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingSummary {
    pub service: String,
    pub duration: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub alternative_date: Option<String>,
}

fn or_placeholder(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

impl BookingSummary {
    pub fn from_selections(selections: &Selections) -> Self {
        Self {
            service: selections
                .service
                .map_or_else(|| PLACEHOLDER.to_string(), |s| s.label().to_string()),
            duration: selections
                .service
                .map_or_else(|| PLACEHOLDER.to_string(), |s| s.duration().to_string()),
            name: or_placeholder(&selections.name),
            email: or_placeholder(&selections.email),
            phone: or_placeholder(&selections.phone),
            location: or_placeholder(&selections.location),
            date: selections
                .date
                .map_or_else(|| PLACEHOLDER.to_string(), format_long_date),
            time: selections
                .time
                .as_deref()
                .map_or_else(|| PLACEHOLDER.to_string(), or_placeholder),
            alternative_date: selections.alternative_date.map(format_long_date),
        }
    }
}
