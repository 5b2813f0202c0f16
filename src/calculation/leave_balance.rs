//! Annual vacation balance for one employee.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{ApprovalState, EmployeeRecord, LeaveInterval};
use crate::source::RecordSource;

use super::dates::parse_date;
use super::span_length::span_length;

/// Vacation entitlement against days taken and requested in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee the balance belongs to.
    pub employee_id: i64,
    /// The calendar year.
    pub year: i32,
    /// Days of vacation granted for the year.
    pub entitlement: i64,
    /// Days of approved vacation starting in the year.
    pub taken: i64,
    /// Days of vacation still awaiting approval.
    pub pending: i64,
    /// `entitlement - taken`; negative when overdrawn.
    pub remaining: i64,
}

/// Computes the vacation balance of `employee` for `year`.
///
/// Intervals are attributed to the year they start in. Rejected requests and
/// intervals of other employees are ignored.
///
/// # Errors
///
/// Returns `ParseError` if a non-rejected interval of the employee has a
/// malformed date.
///
/// # Example
///
/// ```
/// use staff_calendar::calculation::leave_balance;
/// use staff_calendar::config::LeavePolicy;
/// use staff_calendar::models::{ApprovalState, EmployeeRecord, EmployeeStatus, LeaveInterval};
///
/// let employee = EmployeeRecord {
///     id: 1,
///     employee_number: None,
///     first_name: "Anna".to_string(),
///     last_name: "Schmidt".to_string(),
///     birth_date: None,
///     hire_date: None,
///     department: None,
///     status: EmployeeStatus::Active,
///     vacation_days_per_year: Some(28),
/// };
/// let leave = LeaveInterval {
///     id: 1,
///     employee_id: 1,
///     first_name: "Anna".to_string(),
///     last_name: "Schmidt".to_string(),
///     start_date: "2026-08-03".to_string(),
///     end_date: "2026-08-14".to_string(),
///     status: ApprovalState::Approved,
/// };
///
/// let balance = leave_balance(&employee, &[leave], 2026, &LeavePolicy::default()).unwrap();
/// assert_eq!(balance.taken, 10);
/// assert_eq!(balance.remaining, 18);
/// ```
pub fn leave_balance(
    employee: &EmployeeRecord,
    leave: &[LeaveInterval],
    year: i32,
    policy: &LeavePolicy,
) -> EngineResult<LeaveBalance> {
    let entitlement = i64::from(
        employee
            .vacation_days_per_year
            .unwrap_or(policy.vacation_days_default),
    );

    let mut taken = 0;
    let mut pending = 0;
    for interval in leave.iter().filter(|l| l.employee_id == employee.id) {
        if interval.status == ApprovalState::Rejected {
            continue;
        }
        let start = parse_date("start_date", &interval.start_date)?;
        if start.year() != year {
            continue;
        }
        let end = parse_date("end_date", &interval.end_date)?;
        let days = span_length(start, end, policy.count_weekends).max(0);

        match interval.status {
            ApprovalState::Approved => taken += days,
            ApprovalState::Requested => pending += days,
            ApprovalState::Rejected => {}
        }
    }

    Ok(LeaveBalance {
        employee_id: employee.id,
        year,
        entitlement,
        taken,
        pending,
        remaining: entitlement - taken,
    })
}

/// Looks up the employee and their leave in `source` and computes the balance.
///
/// # Errors
///
/// - `EmployeeNotFound` if no employee has the id
/// - `SourceUnavailable` if a query fails
/// - `ParseError` as for [`leave_balance`]
pub fn leave_balance_from_source(
    source: &dyn RecordSource,
    employee_id: i64,
    year: i32,
    policy: &LeavePolicy,
) -> EngineResult<LeaveBalance> {
    let employee = source
        .find_employee(employee_id)?
        .ok_or(EngineError::EmployeeNotFound { id: employee_id })?;
    let leave = source.list_leave()?;
    leave_balance(&employee, &leave, year, policy)
}
