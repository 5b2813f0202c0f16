//! HTTP API module for the staff calendar.
//!
//! This module exposes the calculations over REST: upcoming events, the
//! dashboard summary, vacation balances, leave spans and working time.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LeaveBalanceQuery, SpanRequest, TodayQuery, WorkingTimeRequest};
pub use response::{ApiError, ApiErrorResponse, SpanResponse, WorkingTimeResponse};
pub use state::AppState;
