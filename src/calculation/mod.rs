//! Calculation logic for the staff calendar.
//!
//! This module contains the date arithmetic (parsing, leave spans in
//! calendar or business days, projection of annual dates) and the
//! aggregations built on it: the upcoming-events list, the dashboard
//! figures and the annual vacation balance. All functions take the
//! reference date as a parameter and never read the clock.

mod dashboard;
mod dates;
mod leave_balance;
mod next_occurrence;
mod span_length;
mod upcoming_events;

pub use dashboard::{
    DashboardSummary, UNASSIGNED_DEPARTMENT, dashboard_summary, dashboard_summary_from_source,
};
pub use dates::{
    DISPLAY_DATE_FORMAT, STORAGE_DATE_FORMAT, format_display_date, format_display_range,
    parse_date,
};
pub use leave_balance::{LeaveBalance, leave_balance, leave_balance_from_source};
pub use next_occurrence::{Occurrence, next_occurrence};
pub use span_length::{is_business_day, span_length, span_length_text};
pub use upcoming_events::{UpcomingEventsResult, upcoming_events, upcoming_events_from_source};
