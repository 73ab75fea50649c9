//! Date display formatting

use chrono::{DateTime, NaiveDate};

/// Formats an ISO-like date string for display as `"<day> <Mon> <year>"`
///
/// The day carries no leading zero: `"2024-03-05"` becomes `"5 Mar 2024"`.
/// Plain dates and RFC 3339 timestamps are both accepted. Empty input maps
/// to empty output. Any other unparseable input is returned unchanged —
/// display falls back to what the user typed rather than masking it.
pub fn format_display_date(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map(|date| date.format("%-d %b %Y").to_string())
        .unwrap_or_else(|_| value.to_string())
}
