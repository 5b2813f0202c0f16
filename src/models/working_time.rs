//! Working-time entry model.
//!
//! An entry records one working day's start and end clock times plus the
//! total break taken, as logged by an employee.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A logged working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingTimeEntry {
    /// The working day.
    pub date: NaiveDate,
    /// Clock-in time as `HH:MM`.
    pub start_time: String,
    /// Clock-out time as `HH:MM`.
    pub end_time: String,
    /// Total break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
}

impl WorkingTimeEntry {
    /// Calculates the worked hours for the entry.
    ///
    /// The span between clock-in and clock-out minus the break, in hours,
    /// rounded to two decimal places.
    ///
    /// # Errors
    ///
    /// - `ParseError` if either time is not `HH:MM`
    /// - `InvalidWorkingTime` if the end is not after the start, or the break
    ///   is longer than the span
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_calendar::models::WorkingTimeEntry;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = WorkingTimeEntry {
    ///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     start_time: "08:00".to_string(),
    ///     end_time: "16:45".to_string(),
    ///     break_minutes: 45,
    /// };
    /// assert_eq!(entry.worked_hours().unwrap(), Decimal::new(800, 2)); // 8.00 hours
    /// ```
    pub fn worked_hours(&self) -> EngineResult<Decimal> {
        let start = parse_clock_time("start_time", &self.start_time)?;
        let end = parse_clock_time("end_time", &self.end_time)?;

        if end <= start {
            return Err(EngineError::InvalidWorkingTime {
                message: format!(
                    "end time {} is not after start time {}",
                    self.end_time, self.start_time
                ),
            });
        }

        let span_minutes = (end - start).num_minutes();
        let break_minutes = i64::from(self.break_minutes);
        if break_minutes > span_minutes {
            return Err(EngineError::InvalidWorkingTime {
                message: format!(
                    "break of {} minutes exceeds the {} minute span",
                    break_minutes, span_minutes
                ),
            });
        }

        let worked = Decimal::new(span_minutes - break_minutes, 0) / Decimal::new(60, 0);
        Ok(worked.round_dp(2))
    }
}

fn parse_clock_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::parse(field, value))
}
