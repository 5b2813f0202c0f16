//! Record sources for the staff calendar.
//!
//! A [`RecordSource`] is the read-only view of the personnel database that
//! the calculations run against. Every accessor returns a fresh snapshot;
//! any failure to query is reported as `SourceUnavailable`.

mod memory;
mod sqlite;

use chrono::NaiveDate;

use crate::calculation::parse_date;
use crate::error::EngineResult;
use crate::models::{EmployeeRecord, LeaveInterval, SickLeaveRecord};

pub use memory::InMemorySource;
pub use sqlite::SqliteSource;

/// Read accessors over employee and absence records.
pub trait RecordSource: Send + Sync {
    /// Returns every employee, active or not.
    fn list_employees(&self) -> EngineResult<Vec<EmployeeRecord>>;

    /// Returns every vacation interval regardless of approval state.
    fn list_leave(&self) -> EngineResult<Vec<LeaveInterval>>;

    /// Returns every sick-leave record.
    fn list_sick_leave(&self) -> EngineResult<Vec<SickLeaveRecord>>;

    /// Returns the active employees.
    fn list_active_employees(&self) -> EngineResult<Vec<EmployeeRecord>> {
        Ok(self
            .list_employees()?
            .into_iter()
            .filter(EmployeeRecord::is_active)
            .collect())
    }

    /// Returns approved leave starting on or after `date`, by start date.
    ///
    /// Approved intervals whose start date does not parse come first, in
    /// stored order, so the caller can report them.
    fn list_approved_leave_starting_on_or_after(
        &self,
        date: NaiveDate,
    ) -> EngineResult<Vec<LeaveInterval>> {
        let mut malformed = Vec::new();
        let mut upcoming: Vec<(NaiveDate, LeaveInterval)> = Vec::new();
        for leave in self.list_leave()?.into_iter().filter(LeaveInterval::is_approved) {
            match parse_date("start_date", &leave.start_date) {
                Ok(start) if start >= date => upcoming.push((start, leave)),
                Ok(_) => {}
                Err(_) => malformed.push(leave),
            }
        }
        upcoming.sort_by_key(|(start, _)| *start);
        malformed.extend(upcoming.into_iter().map(|(_, leave)| leave));
        Ok(malformed)
    }

    /// Looks up a single employee.
    fn find_employee(&self, id: i64) -> EngineResult<Option<EmployeeRecord>> {
        Ok(self.list_employees()?.into_iter().find(|e| e.id == id))
    }
}
