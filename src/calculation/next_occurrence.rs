//! Projection of annual dates (birthdays, hiring anniversaries).
//!
//! A February 29 source date falls on February 28 in years without a leap day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The next annual occurrence of a source date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// The occurrence date; today or later.
    pub date: NaiveDate,
    /// Days from the reference date to `date`.
    pub days_until: i64,
    /// Whole years between the source year and the occurrence year.
    ///
    /// For a hire date this is the tenure being celebrated; for a birth date
    /// the age being reached.
    pub years: i32,
}

/// Projects the month and day of `source` onto the first date on or after
/// `today`.
///
/// # Arguments
///
/// * `source` - The birth or hire date supplying month and day
/// * `today` - The reference date
///
/// # Example
///
/// ```
/// use staff_calendar::calculation::next_occurrence;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
///
/// let christmas = next_occurrence(NaiveDate::from_ymd_opt(1990, 12, 25).unwrap(), today);
/// assert_eq!(christmas.date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
/// assert_eq!(christmas.days_until, 5);
///
/// let new_year = next_occurrence(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(), today);
/// assert_eq!(new_year.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert_eq!(new_year.years, 10);
/// ```
pub fn next_occurrence(source: NaiveDate, today: NaiveDate) -> Occurrence {
    let mut date = on_year(source, today.year());
    if date < today {
        date = on_year(source, today.year() + 1);
    }

    Occurrence {
        date,
        days_until: (date - today).num_days(),
        years: date.year() - source.year(),
    }
}

/// Places the month and day of `source` in `year`, clamping Feb 29 to Feb 28.
fn on_year(source: NaiveDate, year: i32) -> NaiveDate {
    source
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, source.month(), 28))
        .unwrap_or(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_later_this_year() {
        let occurrence = next_occurrence(make_date("1985-12-25"), make_date("2024-12-20"));
        assert_eq!(occurrence.date, make_date("2024-12-25"));
        assert_eq!(occurrence.days_until, 5);
        assert_eq!(occurrence.years, 39);
    }

    #[test]
    fn test_rolls_over_to_next_year() {
        let occurrence = next_occurrence(make_date("1985-01-01"), make_date("2024-12-20"));
        assert_eq!(occurrence.date, make_date("2025-01-01"));
        assert_eq!(occurrence.days_until, 12);
        assert_eq!(occurrence.years, 40);
    }

    #[test]
    fn test_today_is_occurrence() {
        let occurrence = next_occurrence(make_date("2019-06-03"), make_date("2024-06-03"));
        assert_eq!(occurrence.date, make_date("2024-06-03"));
        assert_eq!(occurrence.days_until, 0);
        assert_eq!(occurrence.years, 5);
    }

    #[test]
    fn test_yesterday_moves_to_next_year() {
        let occurrence = next_occurrence(make_date("2019-06-02"), make_date("2024-06-03"));
        assert_eq!(occurrence.date, make_date("2025-06-02"));
        assert_eq!(occurrence.days_until, 364);
        assert_eq!(occurrence.years, 6);
    }

    // ==========================================================================
    // February 29
    // ==========================================================================
    #[test]
    fn test_leap_day_in_leap_year() {
        let occurrence = next_occurrence(make_date("2000-02-29"), make_date("2024-02-01"));
        assert_eq!(occurrence.date, make_date("2024-02-29"));
    }

    #[test]
    fn test_leap_day_clamped_to_feb_28() {
        let occurrence = next_occurrence(make_date("2000-02-29"), make_date("2025-02-01"));
        assert_eq!(occurrence.date, make_date("2025-02-28"));
        assert_eq!(occurrence.days_until, 27);
        assert_eq!(occurrence.years, 25);
    }

    #[test]
    fn test_leap_day_clamped_after_rollover() {
        // On 2026-03-01 the 2026 occurrence (Feb 28) is past; 2027 is not a leap year either.
        let occurrence = next_occurrence(make_date("2004-02-29"), make_date("2026-03-01"));
        assert_eq!(occurrence.date, make_date("2027-02-28"));
    }

    #[test]
    fn test_leap_day_on_feb_28_of_non_leap_year_is_today() {
        let occurrence = next_occurrence(make_date("2004-02-29"), make_date("2026-02-28"));
        assert_eq!(occurrence.date, make_date("2026-02-28"));
        assert_eq!(occurrence.days_until, 0);
    }

    #[test]
    fn test_future_source_yields_non_positive_years() {
        let occurrence = next_occurrence(make_date("2027-03-01"), make_date("2026-01-01"));
        assert_eq!(occurrence.date, make_date("2026-03-01"));
        assert_eq!(occurrence.years, -1);
    }
}
