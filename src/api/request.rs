//! Request types for the staff calendar API.
//!
//! Dates arrive as text and are parsed by the handlers so that a bad value
//! is answered with the engine's own `PARSE_ERROR` body.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::WorkingTimeEntry;

/// Query string carrying an optional reference date.
///
/// When `today` is absent the server's local date is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodayQuery {
    /// Reference date as `YYYY-MM-DD`.
    #[serde(default)]
    pub today: Option<String>,
}

/// Query string of the leave-balance endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveBalanceQuery {
    /// Calendar year; defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
}

/// Request body for `POST /span`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanRequest {
    /// First day as `YYYY-MM-DD`.
    pub start: String,
    /// Last day (inclusive) as `YYYY-MM-DD`.
    pub end: String,
    /// Count Saturdays and Sundays.
    #[serde(default = "default_include_weekends")]
    pub include_weekends: bool,
}

fn default_include_weekends() -> bool {
    true
}

/// Request body for `POST /working-time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingTimeRequest {
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

impl From<WorkingTimeRequest> for WorkingTimeEntry {
    fn from(req: WorkingTimeRequest) -> Self {
        WorkingTimeEntry {
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            break_minutes: req.break_minutes,
        }
    }
}
