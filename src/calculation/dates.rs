//! Date parsing and display formatting.
//!
//! Records store dates as `YYYY-MM-DD` text; the presentation layer shows
//! them as `dd.mm.yyyy`.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// The storage format of every date field.
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// The display format used in event lists.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a stored `YYYY-MM-DD` date.
///
/// # Arguments
///
/// * `field` - The field name reported in the error
/// * `value` - The raw text
///
/// # Example
///
/// ```
/// use staff_calendar::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("hire_date", "2019-04-01").unwrap(),
///     NaiveDate::from_ymd_opt(2019, 4, 1).unwrap()
/// );
/// assert!(parse_date("hire_date", "01.04.2019").is_err());
/// ```
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), STORAGE_DATE_FORMAT)
        .map_err(|_| EngineError::parse(field, value))
}

/// Formats a date as `dd.mm.yyyy`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Formats an inclusive date range as `dd.mm.yyyy - dd.mm.yyyy`.
pub fn format_display_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", format_display_date(start), format_display_date(end))
}
