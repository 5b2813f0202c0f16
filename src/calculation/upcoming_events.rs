//! Upcoming personnel events for the dashboard.
//!
//! Three passes feed one list: birthdays, round-number service anniversaries
//! and approved leave about to start. Each record is handled on its own; a
//! record whose date cannot be parsed is skipped and reported, never fatal
//! to the list. A record source that cannot be queried fails the whole call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EventWindows;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, EventCategory, LeaveInterval, ProjectedEvent, SkippedRecord};
use crate::source::RecordSource;

use super::dates::{format_display_date, format_display_range, parse_date};
use super::next_occurrence::next_occurrence;

/// The merged event list plus the records that had to be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEventsResult {
    /// Events sorted by date, at most `result_limit` long.
    pub events: Vec<ProjectedEvent>,
    /// Records left out because a date did not parse.
    pub skipped: Vec<SkippedRecord>,
}

/// Builds the upcoming-events list from a snapshot of records.
///
/// # Arguments
///
/// * `today` - The reference date; nothing before it is listed
/// * `employees` - Employee records; inactive ones are ignored
/// * `leave` - Vacation intervals; only approved ones starting on or after
///   `today` are considered, in start-date order, at most
///   `windows.leave_limit` of them
/// * `windows` - Look-ahead windows and limits
///
/// # Behavior
///
/// - Birthday: next occurrence within `birthday_window_days` (inclusive)
/// - Anniversary: next occurrence within `anniversary_window_days` and a
///   tenure that is a positive multiple of `anniversary_step_years`
/// - Leave: start date within `leave_window_days`
/// - Events are stable-sorted by date, so same-day events keep the order
///   birthdays, anniversaries, leave; then truncated to `result_limit`
///
/// # Example
///
/// ```
/// use staff_calendar::calculation::upcoming_events;
/// use staff_calendar::config::EventWindows;
/// use staff_calendar::models::{EmployeeRecord, EmployeeStatus, EventCategory};
/// use chrono::NaiveDate;
///
/// let employee = EmployeeRecord {
///     id: 1,
///     employee_number: None,
///     first_name: "Anna".to_string(),
///     last_name: "Schmidt".to_string(),
///     birth_date: Some("1990-12-25".to_string()),
///     hire_date: Some("2019-12-30".to_string()),
///     department: None,
///     status: EmployeeStatus::Active,
///     vacation_days_per_year: None,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
/// let result = upcoming_events(today, &[employee], &[], &EventWindows::default());
///
/// assert_eq!(result.events.len(), 2);
/// assert_eq!(result.events[0].category, EventCategory::Birthday);
/// assert_eq!(result.events[1].description, "5-year anniversary of Anna Schmidt");
/// ```
pub fn upcoming_events(
    today: NaiveDate,
    employees: &[EmployeeRecord],
    leave: &[LeaveInterval],
    windows: &EventWindows,
) -> UpcomingEventsResult {
    let mut result = UpcomingEventsResult::default();
    let active: Vec<&EmployeeRecord> = employees.iter().filter(|e| e.is_active()).collect();

    for employee in &active {
        let Some(raw) = employee.birth_date.as_deref() else {
            continue;
        };
        let birth_date = match parse_date("birth_date", raw) {
            Ok(date) => date,
            Err(err) => {
                skip(&mut result, EventCategory::Birthday, employee.id, err);
                continue;
            }
        };

        let occurrence = next_occurrence(birth_date, today);
        if (0..=windows.birthday_window_days).contains(&occurrence.days_until) {
            result.events.push(ProjectedEvent {
                category: EventCategory::Birthday,
                employee_id: employee.id,
                description: format!("Birthday of {}", employee.full_name()),
                date: occurrence.date,
                end_date: None,
                days_until: occurrence.days_until,
                display_date: format_display_date(occurrence.date),
            });
        }
    }

    for employee in &active {
        let Some(raw) = employee.hire_date.as_deref() else {
            continue;
        };
        let hire_date = match parse_date("hire_date", raw) {
            Ok(date) => date,
            Err(err) => {
                skip(&mut result, EventCategory::Anniversary, employee.id, err);
                continue;
            }
        };

        let occurrence = next_occurrence(hire_date, today);
        let round_tenure = occurrence.years > 0
            && windows.anniversary_step_years > 0
            && occurrence.years % windows.anniversary_step_years == 0;
        if round_tenure && (0..=windows.anniversary_window_days).contains(&occurrence.days_until) {
            result.events.push(ProjectedEvent {
                category: EventCategory::Anniversary,
                employee_id: employee.id,
                description: format!(
                    "{}-year anniversary of {}",
                    occurrence.years,
                    employee.full_name()
                ),
                date: occurrence.date,
                end_date: None,
                days_until: occurrence.days_until,
                display_date: format_display_date(occurrence.date),
            });
        }
    }

    let mut upcoming: Vec<(NaiveDate, &LeaveInterval)> = Vec::new();
    for interval in leave.iter().filter(|l| l.is_approved()) {
        match parse_date("start_date", &interval.start_date) {
            Ok(start) if start >= today => upcoming.push((start, interval)),
            Ok(_) => {}
            Err(err) => skip(&mut result, EventCategory::UpcomingLeave, interval.id, err),
        }
    }
    upcoming.sort_by_key(|(start, _)| *start);

    for (start, interval) in upcoming.into_iter().take(windows.leave_limit) {
        let end = match parse_date("end_date", &interval.end_date) {
            Ok(date) => date,
            Err(err) => {
                skip(&mut result, EventCategory::UpcomingLeave, interval.id, err);
                continue;
            }
        };

        let days_until = (start - today).num_days();
        if (0..=windows.leave_window_days).contains(&days_until) {
            result.events.push(ProjectedEvent {
                category: EventCategory::UpcomingLeave,
                employee_id: interval.employee_id,
                description: format!("{} is on leave", interval.employee_name()),
                date: start,
                end_date: Some(end),
                days_until,
                display_date: format_display_range(start, end),
            });
        }
    }

    // Stable: same-day events keep emission order.
    result.events.sort_by_key(|event| event.date);
    result.events.truncate(windows.result_limit);

    debug!(
        today = %today,
        events = result.events.len(),
        skipped = result.skipped.len(),
        "Projected upcoming events"
    );
    result
}

/// Queries `source` and builds the upcoming-events list.
///
/// # Errors
///
/// Returns `SourceUnavailable` if either query fails; no partial list is
/// returned in that case.
pub fn upcoming_events_from_source(
    source: &dyn RecordSource,
    today: NaiveDate,
    windows: &EventWindows,
) -> EngineResult<UpcomingEventsResult> {
    let employees = source.list_active_employees()?;
    let leave = source.list_approved_leave_starting_on_or_after(today)?;
    Ok(upcoming_events(today, &employees, &leave, windows))
}

fn skip(result: &mut UpcomingEventsResult, category: EventCategory, record_id: i64, err: EngineError) {
    let (field, value) = match &err {
        EngineError::ParseError { field, value } => (field.clone(), value.clone()),
        other => (String::new(), other.to_string()),
    };
    warn!(
        category = %category,
        record_id,
        field = %field,
        value = %value,
        "Skipping record with unusable date"
    );
    result.skipped.push(SkippedRecord {
        category,
        record_id,
        field,
        value,
        reason: err.to_string(),
    });
}
