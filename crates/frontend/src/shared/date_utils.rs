/// Utilities for the validity-date field
///
/// The registry expects ISO-8601 dates (yyyy-MM-dd); the date input and
/// the "Dagens dato" convenience button both go through these helpers.
use chrono::{NaiveDate, Utc};

/// Format a date as yyyy-MM-dd.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date as yyyy-MM-dd.
pub fn today_iso() -> String {
    format_iso_date(Utc::now().date_naive())
}
