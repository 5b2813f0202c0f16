//! Configuration types for the staff calendar.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default so a partial file, or none at all, yields a working setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Windows and limits used by the upcoming-events projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventWindows {
    /// Birthdays this many days ahead (inclusive) are listed.
    pub birthday_window_days: i64,
    /// Anniversaries this many days ahead (inclusive) are listed.
    pub anniversary_window_days: i64,
    /// Only tenures that are a multiple of this many years count.
    pub anniversary_step_years: i32,
    /// Leave starting this many days ahead (inclusive) is listed.
    pub leave_window_days: i64,
    /// At most this many upcoming leave intervals are considered.
    pub leave_limit: usize,
    /// Maximum length of the merged list.
    pub result_limit: usize,
}

impl Default for EventWindows {
    fn default() -> Self {
        Self {
            birthday_window_days: 30,
            anniversary_window_days: 30,
            anniversary_step_years: 5,
            leave_window_days: 14,
            leave_limit: 5,
            result_limit: 10,
        }
    }
}

/// Leave accounting policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeavePolicy {
    /// Annual vacation entitlement for employees without their own value.
    pub vacation_days_default: u32,
    /// Count Saturdays and Sundays as leave days.
    pub count_weekends: bool,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            vacation_days_default: 30,
            count_weekends: false,
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Company name shown by the presentation layer.
    pub company_name: String,
    /// Path of the SQLite database file.
    pub database_path: PathBuf,
    /// Upcoming-events windows.
    pub events: EventWindows,
    /// Leave accounting policy.
    pub leave: LeavePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company_name: "Your Company".to_string(),
            database_path: PathBuf::from("employees.db"),
            events: EventWindows::default(),
            leave: LeavePolicy::default(),
        }
    }
}
