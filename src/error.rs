//! Error types for the staff calendar engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Two kinds matter most to callers: [`EngineError::ParseError`] for a single
//! bad date value and [`EngineError::SourceUnavailable`] for a record source
//! that could not be queried at all. A failing database is never reported
//! as an empty event list.

use thiserror::Error;

/// The main error type for the staff calendar engine.
///
/// # Example
///
/// ```
/// use staff_calendar::error::EngineError;
///
/// let error = EngineError::ParseError {
///     field: "birth_date".to_string(),
///     value: "1990-13-01".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date in 'birth_date': 1990-13-01");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date or time field could not be parsed.
    #[error("Invalid date in '{field}': {value}")]
    ParseError {
        /// The name of the field that failed to parse.
        field: String,
        /// The raw text that was rejected.
        value: String,
    },

    /// The record source could not be queried.
    #[error("Record source unavailable: {message}")]
    SourceUnavailable {
        /// A description of the underlying failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee exists with the requested identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: i64,
    },

    /// A working-time entry was inconsistent.
    #[error("Invalid working time: {message}")]
    InvalidWorkingTime {
        /// A description of what made the entry invalid.
        message: String,
    },
}

impl EngineError {
    /// Builds a [`EngineError::ParseError`] for the given field and raw value.
    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        EngineError::ParseError {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Builds a [`EngineError::SourceUnavailable`] from any displayable cause.
    pub fn source_unavailable(cause: impl std::fmt::Display) -> Self {
        EngineError::SourceUnavailable {
            message: cause.to_string(),
        }
    }
}

impl From<rusqlite::Error> for EngineError {
    fn from(error: rusqlite::Error) -> Self {
        EngineError::source_unavailable(error)
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
