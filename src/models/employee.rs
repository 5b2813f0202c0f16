//! Employee record model.
//!
//! Dates are carried as the `YYYY-MM-DD` text stored by the record source so
//! that a malformed value surfaces in the engine, where it can be skipped per
//! record, rather than failing the whole query.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Whether an employee is currently employed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed; included in events and headcounts.
    Active,
    /// Left the company or suspended.
    Inactive,
}

impl EmployeeStatus {
    /// Returns the storage code for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    /// Parses a storage code, ignoring case and surrounding whitespace.
    ///
    /// Accepts the English codes written by this crate and the German codes
    /// of older databases (`Aktiv`, `Inaktiv`). Unknown values are treated
    /// as inactive and logged.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "active" | "aktiv" => EmployeeStatus::Active,
            "inactive" | "inaktiv" => EmployeeStatus::Inactive,
            _ => {
                warn!(code, "Unknown employee status, treating as inactive");
                EmployeeStatus::Inactive
            }
        }
    }
}

/// An employee as seen by the calendar engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Database identifier.
    pub id: i64,
    /// Company personnel number (e.g. "MA-0012").
    #[serde(default)]
    pub employee_number: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth as `YYYY-MM-DD` text.
    #[serde(default)]
    pub birth_date: Option<String>,
    /// First day of employment as `YYYY-MM-DD` text.
    #[serde(default)]
    pub hire_date: Option<String>,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Annual vacation entitlement; the configured default applies when absent.
    #[serde(default)]
    pub vacation_days_per_year: Option<u32>,
}

impl EmployeeRecord {
    /// Returns "first last".
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_calendar::models::{EmployeeRecord, EmployeeStatus};
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
    ///     vacation_days_per_year: None,
    /// };
    /// assert_eq!(employee.full_name(), "Anna Schmidt");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is active.
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}
