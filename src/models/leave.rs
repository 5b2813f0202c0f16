//! Vacation and sick-leave models.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Approval state of a vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    /// Submitted, awaiting a decision.
    Requested,
    /// Approved; the employee will be absent.
    Approved,
    /// Rejected; ignored by every calculation.
    Rejected,
}

impl ApprovalState {
    /// Returns the storage code for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalState::Requested => "requested",
            ApprovalState::Approved => "approved",
            ApprovalState::Rejected => "rejected",
        }
    }

    /// Parses a storage code, ignoring case and surrounding whitespace.
    ///
    /// Accepts the English codes written by this crate and the German codes
    /// of older databases (`Beantragt`, `Genehmigt`, `Abgelehnt`). Unknown
    /// values are treated as requested and logged.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "requested" | "beantragt" => ApprovalState::Requested,
            "approved" | "genehmigt" => ApprovalState::Approved,
            "rejected" | "abgelehnt" => ApprovalState::Rejected,
            _ => {
                warn!(code, "Unknown approval state, treating as requested");
                ApprovalState::Requested
            }
        }
    }
}

/// A vacation request with its inclusive date range.
///
/// The employee's name is joined in by the record source so that events can
/// be described without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// Database identifier.
    pub id: i64,
    /// The employee taking the leave.
    pub employee_id: i64,
    /// Employee given name.
    pub first_name: String,
    /// Employee family name.
    pub last_name: String,
    /// First day of leave as `YYYY-MM-DD` text.
    pub start_date: String,
    /// Last day of leave (inclusive) as `YYYY-MM-DD` text.
    pub end_date: String,
    /// Approval state.
    pub status: ApprovalState,
}

impl LeaveInterval {
    /// Returns true if the interval has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == ApprovalState::Approved
    }

    /// Returns "first last" of the employee on leave.
    pub fn employee_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A reported sickness absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeaveRecord {
    /// Database identifier.
    pub id: i64,
    /// The employee who was absent.
    pub employee_id: i64,
    /// First day of absence as `YYYY-MM-DD` text.
    pub start_date: String,
    /// Last day of absence (inclusive) as `YYYY-MM-DD` text.
    pub end_date: String,
    /// Whether a medical certificate was handed in.
    #[serde(default)]
    pub medical_certificate: bool,
}
