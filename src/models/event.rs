//! Projected personnel events and skipped-record reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of an upcoming event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// An employee's birthday.
    Birthday,
    /// A round-number service anniversary.
    Anniversary,
    /// Approved leave starting soon.
    UpcomingLeave,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Birthday => write!(f, "Birthday"),
            EventCategory::Anniversary => write!(f, "Anniversary"),
            EventCategory::UpcomingLeave => write!(f, "UpcomingLeave"),
        }
    }
}

/// A single entry of the upcoming-events list.
///
/// # Example
///
/// ```
/// use staff_calendar::models::{EventCategory, ProjectedEvent};
/// use chrono::NaiveDate;
///
/// let event = ProjectedEvent {
///     category: EventCategory::Birthday,
///     employee_id: 1,
///     description: "Birthday of Anna Schmidt".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
///     end_date: None,
///     days_until: 14,
///     display_date: "02.11.2026".to_string(),
/// };
/// assert_eq!(event.category.to_string(), "Birthday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedEvent {
    /// What kind of event this is.
    pub category: EventCategory,
    /// The employee the event belongs to.
    pub employee_id: i64,
    /// Human-readable description.
    pub description: String,
    /// The occurrence date; the sort key.
    pub date: NaiveDate,
    /// Last day of leave, for leave events only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Days from the reference date to `date`.
    pub days_until: i64,
    /// `dd.mm.yyyy`, or `dd.mm.yyyy - dd.mm.yyyy` for leave.
    pub display_date: String,
}

/// A record left out of an aggregation because one of its dates was unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// The event pass that skipped the record.
    pub category: EventCategory,
    /// Identifier of the employee or leave record.
    pub record_id: i64,
    /// The offending field.
    pub field: String,
    /// The raw value.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}
