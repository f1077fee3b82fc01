//! Display formatting for dates and text in the ticket screens.
//!
//! Dates arrive from the API as ISO-8601 strings, either date-only
//! (`2024-03-15`) or with a time (`2024-03-15T14:30:00`, optionally with an
//! offset). Output follows the French convention used throughout the UI.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTH_NAMES: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin",
    "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    value
        .trim()
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

fn medium_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}

/// "15 mars 2024". Unparseable input is returned unchanged.
pub fn format_date_fr(value: &str) -> String {
    match parse_date(value) {
        Some(date) => medium_date(date),
        None => value.to_string(),
    }
}

/// "15 mars 2024 à 14:30", or the date alone when there is no time part.
pub fn format_datetime_fr(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => format!("{} à {}", medium_date(dt.date()), dt.format("%H:%M")),
        None => format_date_fr(value),
    }
}

/// Cut `text` to at most `max` characters, ending with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// "1 ticket" / "3 tickets".
pub fn pluralize_tickets(count: usize) -> String {
    if count == 1 {
        "1 ticket".to_string()
    } else {
        format!("{count} tickets")
    }
}
