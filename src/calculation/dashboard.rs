//! Dashboard figures: headcounts, absences today, and leave days per month.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::{EmployeeRecord, LeaveInterval, SickLeaveRecord};
use crate::source::RecordSource;

use super::dates::parse_date;
use super::span_length::span_length;

/// Department label for employees without one.
pub const UNASSIGNED_DEPARTMENT: &str = "Other";

/// Summary figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The reference date the figures were computed for.
    pub today: NaiveDate,
    /// Number of active employees.
    pub active_employees: usize,
    /// Distinct employees on approved vacation today.
    pub on_vacation_today: usize,
    /// Distinct employees on sick leave today.
    pub on_sick_leave_today: usize,
    /// Active employees with a birthday in the current month.
    pub birthdays_this_month: usize,
    /// Active employees per department.
    pub headcount_by_department: BTreeMap<String, usize>,
    /// Approved vacation days by start month (January first) in the current year.
    pub vacation_days_by_month: [i64; 12],
    /// Sick days by start month (January first) in the current year.
    pub sick_days_by_month: [i64; 12],
}

/// Computes the dashboard figures for `today`.
///
/// Each absence is attributed in full to the month it starts in, counted in
/// business days unless `policy.count_weekends` is set. Records with dates
/// that do not parse are left out of every figure.
pub fn dashboard_summary(
    today: NaiveDate,
    employees: &[EmployeeRecord],
    leave: &[LeaveInterval],
    sick_leave: &[SickLeaveRecord],
    policy: &LeavePolicy,
) -> DashboardSummary {
    let active: Vec<&EmployeeRecord> = employees.iter().filter(|e| e.is_active()).collect();

    let mut headcount_by_department = BTreeMap::new();
    for employee in &active {
        let department = employee
            .department
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(UNASSIGNED_DEPARTMENT);
        *headcount_by_department
            .entry(department.to_string())
            .or_insert(0) += 1;
    }

    let birthdays_this_month = active
        .iter()
        .filter_map(|e| e.birth_date.as_deref())
        .filter_map(|raw| parse_date("birth_date", raw).ok())
        .filter(|date| date.month() == today.month())
        .count();

    let approved: Vec<(i64, NaiveDate, NaiveDate)> = leave
        .iter()
        .filter(|l| l.is_approved())
        .filter_map(|l| parsed_range(l.employee_id, &l.start_date, &l.end_date))
        .collect();
    let sick: Vec<(i64, NaiveDate, NaiveDate)> = sick_leave
        .iter()
        .filter_map(|s| parsed_range(s.employee_id, &s.start_date, &s.end_date))
        .collect();

    let summary = DashboardSummary {
        today,
        active_employees: active.len(),
        on_vacation_today: absent_on(&approved, today),
        on_sick_leave_today: absent_on(&sick, today),
        birthdays_this_month,
        headcount_by_department,
        vacation_days_by_month: days_by_month(&approved, today.year(), policy.count_weekends),
        sick_days_by_month: days_by_month(&sick, today.year(), policy.count_weekends),
    };

    debug!(
        today = %today,
        active = summary.active_employees,
        on_vacation = summary.on_vacation_today,
        on_sick_leave = summary.on_sick_leave_today,
        "Computed dashboard summary"
    );
    summary
}

/// Queries `source` and computes the dashboard figures.
///
/// # Errors
///
/// Returns `SourceUnavailable` if any query fails.
pub fn dashboard_summary_from_source(
    source: &dyn RecordSource,
    today: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<DashboardSummary> {
    let employees = source.list_employees()?;
    let leave = source.list_leave()?;
    let sick_leave = source.list_sick_leave()?;
    Ok(dashboard_summary(today, &employees, &leave, &sick_leave, policy))
}

fn parsed_range(employee_id: i64, start: &str, end: &str) -> Option<(i64, NaiveDate, NaiveDate)> {
    let start = parse_date("start_date", start).ok()?;
    let end = parse_date("end_date", end).ok()?;
    Some((employee_id, start, end))
}

fn absent_on(ranges: &[(i64, NaiveDate, NaiveDate)], day: NaiveDate) -> usize {
    ranges
        .iter()
        .filter(|(_, start, end)| *start <= day && day <= *end)
        .map(|(employee_id, _, _)| *employee_id)
        .collect::<HashSet<_>>()
        .len()
}

fn days_by_month(ranges: &[(i64, NaiveDate, NaiveDate)], year: i32, count_weekends: bool) -> [i64; 12] {
    let mut months = [0i64; 12];
    for (_, start, end) in ranges.iter().filter(|(_, start, _)| start.year() == year) {
        months[start.month0() as usize] += span_length(*start, *end, count_weekends).max(0);
    }
    months
}
