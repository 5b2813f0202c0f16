//! HTTP request handlers for the staff calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    dashboard_summary_from_source, leave_balance_from_source, parse_date, span_length_text,
    upcoming_events_from_source,
};
use crate::error::{EngineError, EngineResult};
use crate::models::WorkingTimeEntry;

use super::request::{LeaveBalanceQuery, SpanRequest, TodayQuery, WorkingTimeRequest};
use super::response::{ApiError, ApiErrorResponse, SpanResponse, WorkingTimeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(events_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/employees/:id/leave-balance", get(leave_balance_handler))
        .route("/span", post(span_handler))
        .route("/working-time", post(working_time_handler))
        .with_state(state)
}

/// Handler for GET /events.
///
/// Returns the upcoming birthdays, anniversaries and leave for `today`.
async fn events_handler(State(state): State<AppState>, Query(query): Query<TodayQuery>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing upcoming events request");

    let start_time = Instant::now();
    let result = match resolve_today(&query) {
        Ok(today) => {
            with_source(state, move |state| {
                upcoming_events_from_source(state.source(), today, state.config().events())
            })
            .await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                events = result.events.len(),
                skipped = result.skipped.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Upcoming events computed"
            );
            json_ok(&result)
        }
        Err(err) => engine_error(correlation_id, err.into()),
    }
}

/// Handler for GET /dashboard.
async fn dashboard_handler(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dashboard request");

    let result = match resolve_today(&query) {
        Ok(today) => {
            with_source(state, move |state| {
                dashboard_summary_from_source(state.source(), today, state.config().leave())
            })
            .await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(summary) => json_ok(&summary),
        Err(err) => engine_error(correlation_id, err.into()),
    }
}

/// Handler for GET /employees/:id/leave-balance.
async fn leave_balance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Query(query): Query<LeaveBalanceQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let year = query.year.unwrap_or_else(|| Local::now().date_naive().year());
    info!(
        correlation_id = %correlation_id,
        employee_id,
        year,
        "Processing leave balance request"
    );

    let result = with_source(state, move |state| {
        leave_balance_from_source(state.source(), employee_id, year, state.config().leave())
    })
    .await;

    match result {
        Ok(balance) => json_ok(&balance),
        Err(err) => engine_error(correlation_id, err.into()),
    }
}

/// Handler for POST /span.
///
/// Counts the days of an inclusive date range.
async fn span_handler(payload: Result<Json<SpanRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    match span_length_text(&request.start, &request.end, request.include_weekends) {
        Ok(days) => json_ok(&SpanResponse { days }),
        Err(err) => engine_error(correlation_id, err.into()),
    }
}

/// Handler for POST /working-time.
///
/// Computes the worked hours of one logged day.
async fn working_time_handler(payload: Result<Json<WorkingTimeRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let entry: WorkingTimeEntry = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return json_rejection(correlation_id, rejection),
    };

    match entry.worked_hours() {
        Ok(hours) => json_ok(&WorkingTimeResponse { hours }),
        Err(err) => engine_error(correlation_id, err.into()),
    }
}

/// Runs a record-source query on the blocking thread pool.
async fn with_source<T, F>(state: AppState, query: F) -> EngineResult<T>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> EngineResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || query(&state))
        .await
        .map_err(EngineError::source_unavailable)?
}

/// Parses the optional `today` parameter, defaulting to the local date.
fn resolve_today(query: &TodayQuery) -> EngineResult<NaiveDate> {
    match query.today.as_deref() {
        Some(raw) => parse_date("today", raw),
        None => Ok(Local::now().date_naive()),
    }
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error(correlation_id: Uuid, api_error: ApiErrorResponse) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        error = %api_error.error.message,
        "Request failed"
    );
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
