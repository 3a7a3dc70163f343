//! Timestamp formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display form used for creation and update dates.
const DISPLAY_FORMAT: &str = "%B %d, %Y";

/// Formats an ISO-8601 timestamp as "Month DD, YYYY".
///
/// Empty input yields `"Unknown"`. Input that cannot be parsed is returned
/// unchanged.
#[must_use]
pub fn format_date(input: &str) -> String {
    if input.is_empty() {
        return "Unknown".to_string();
    }

    match parse_date(input) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => input.to_string(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
