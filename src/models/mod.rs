//! Core data models for the staff calendar engine.
//!
//! This module contains the records read from the record source and the
//! transient values produced by the calculations.

mod employee;
mod event;
mod leave;
mod working_time;

pub use employee::{EmployeeRecord, EmployeeStatus};
pub use event::{EventCategory, ProjectedEvent, SkippedRecord};
pub use leave::{ApprovalState, LeaveInterval, SickLeaveRecord};
pub use working_time::WorkingTimeEntry;
