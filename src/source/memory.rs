//! In-memory record source.

use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, LeaveInterval, SickLeaveRecord};

use super::RecordSource;

#[derive(Debug, Default)]
struct Records {
    employees: Vec<EmployeeRecord>,
    leave: Vec<LeaveInterval>,
    sick_leave: Vec<SickLeaveRecord>,
}

/// A record source holding its records in memory.
///
/// Used by tests and benchmarks, and by callers that already hold a
/// snapshot. The source can be switched offline to simulate a database
/// that cannot be reached.
///
/// # Example
///
/// ```
/// use staff_calendar::source::{InMemorySource, RecordSource};
///
/// let source = InMemorySource::new(vec![], vec![], vec![]);
/// assert!(source.list_employees().unwrap().is_empty());
///
/// source.set_offline(true);
/// assert!(source.list_employees().is_err());
/// ```
#[derive(Debug, Default)]
pub struct InMemorySource {
    records: RwLock<Records>,
    offline: RwLock<bool>,
}

impl InMemorySource {
    /// Creates a source over the given records.
    pub fn new(
        employees: Vec<EmployeeRecord>,
        leave: Vec<LeaveInterval>,
        sick_leave: Vec<SickLeaveRecord>,
    ) -> Self {
        Self {
            records: RwLock::new(Records {
                employees,
                leave,
                sick_leave,
            }),
            offline: RwLock::new(false),
        }
    }

    /// Makes every query fail with `SourceUnavailable` while `offline` is set.
    pub fn set_offline(&self, offline: bool) {
        if let Ok(mut flag) = self.offline.write() {
            *flag = offline;
        }
    }

    /// Adds an employee.
    pub fn push_employee(&self, employee: EmployeeRecord) {
        if let Ok(mut records) = self.records.write() {
            records.employees.push(employee);
        }
    }

    /// Adds a vacation interval.
    pub fn push_leave(&self, leave: LeaveInterval) {
        if let Ok(mut records) = self.records.write() {
            records.leave.push(leave);
        }
    }

    /// Adds a sick-leave record.
    pub fn push_sick_leave(&self, record: SickLeaveRecord) {
        if let Ok(mut records) = self.records.write() {
            records.sick_leave.push(record);
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Records) -> T) -> EngineResult<T> {
        let offline = self
            .offline
            .read()
            .map_err(|_| EngineError::source_unavailable("record lock poisoned"))?;
        if *offline {
            return Err(EngineError::source_unavailable("record source is offline"));
        }
        let records = self
            .records
            .read()
            .map_err(|_| EngineError::source_unavailable("record lock poisoned"))?;
        Ok(f(&records))
    }
}

impl RecordSource for InMemorySource {
    fn list_employees(&self) -> EngineResult<Vec<EmployeeRecord>> {
        self.read(|r| r.employees.clone())
    }

    fn list_leave(&self) -> EngineResult<Vec<LeaveInterval>> {
        self.read(|r| r.leave.clone())
    }

    fn list_sick_leave(&self) -> EngineResult<Vec<SickLeaveRecord>> {
        self.read(|r| r.sick_leave.clone())
    }
}
