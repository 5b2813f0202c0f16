//! Leave duration in calendar days or business days.
//!
//! Ranges are inclusive of both endpoints. A reversed range is passed
//! through rather than normalised: the calendar-day count comes out zero or
//! negative and the business-day count comes out zero.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::EngineResult;

use super::dates::parse_date;

/// Returns true for Monday through Friday.
///
/// # Example
///
/// ```
/// use staff_calendar::calculation::is_business_day;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// // 2026-01-19 is a Monday
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()));
/// ```
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the days in `[start, end]`.
///
/// # Arguments
///
/// * `start` - First day of the range
/// * `end` - Last day of the range (inclusive)
/// * `include_weekends` - Count every calendar day when true, only
///   Monday–Friday when false
///
/// # Returns
///
/// - `include_weekends = true`: `(end - start) + 1`, which is `<= 0` for a
///   reversed range
/// - `include_weekends = false`: the number of business days, `0` for a
///   reversed range
///
/// # Example
///
/// ```
/// use staff_calendar::calculation::span_length;
/// use chrono::NaiveDate;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// assert_eq!(span_length(monday, sunday, true), 7);
/// assert_eq!(span_length(monday, sunday, false), 5);
/// ```
pub fn span_length(start: NaiveDate, end: NaiveDate, include_weekends: bool) -> i64 {
    let calendar_days = (end - start).num_days() + 1;
    if include_weekends {
        return calendar_days;
    }
    if calendar_days <= 0 {
        return 0;
    }

    // Whole weeks contribute five business days each; walk only the remainder.
    let full_weeks = calendar_days / 7;
    let mut days = full_weeks * 5;
    let mut current = start + Duration::days(full_weeks * 7);
    while current <= end {
        if is_business_day(current) {
            days += 1;
        }
        current += Duration::days(1);
    }
    days
}

/// Counts the days between two stored `YYYY-MM-DD` dates.
///
/// Same rules as [`span_length`]; a malformed date is returned as
/// `ParseError` for the caller to handle.
///
/// # Example
///
/// ```
/// use staff_calendar::calculation::span_length_text;
///
/// assert_eq!(span_length_text("2024-01-01", "2024-01-07", false).unwrap(), 5);
/// assert!(span_length_text("2024-01-01", "next week", false).is_err());
/// ```
pub fn span_length_text(start: &str, end: &str, include_weekends: bool) -> EngineResult<i64> {
    let start = parse_date("start_date", start)?;
    let end = parse_date("end_date", end)?;
    Ok(span_length(start, end, include_weekends))
}
