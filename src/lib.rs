//! Staff calendar engine for HR record keeping.
//!
//! This crate provides the date-driven business rules of a personnel
//! database: leave durations in calendar or business days, birthday and
//! service-anniversary projection, the upcoming-events list shown on the
//! dashboard, dashboard figures and vacation balances. Records are read
//! through a [`source::RecordSource`], backed by SQLite or memory, and the
//! results are served over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
