//! Integration tests for the staff calendar API.
//!
//! This test suite drives the router end to end:
//! - Upcoming events (birthdays, anniversaries, leave)
//! - Dashboard summary
//! - Leave balances
//! - Span and working-time calculations
//! - Error cases (bad dates, unknown employees, unavailable records)

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use staff_calendar::api::{AppState, create_router};
use staff_calendar::config::ConfigLoader;
use staff_calendar::models::{ApprovalState, EmployeeRecord, EmployeeStatus};
use staff_calendar::source::{InMemorySource, RecordSource, SqliteSource};

// =============================================================================
// Test Helpers
// =============================================================================

fn employee(
    first: &str,
    last: &str,
    birth: Option<&str>,
    hire: Option<&str>,
    department: Option<&str>,
) -> EmployeeRecord {
    EmployeeRecord {
        id: 0,
        employee_number: None,
        first_name: first.to_string(),
        last_name: last.to_string(),
        birth_date: birth.map(str::to_string),
        hire_date: hire.map(str::to_string),
        department: department.map(str::to_string),
        status: EmployeeStatus::Active,
        vacation_days_per_year: None,
    }
}

/// A small company, seeded into an in-memory SQLite database.
fn seeded_source() -> SqliteSource {
    let source = SqliteSource::open_memory().expect("Failed to open database");

    let anna = source
        .insert_employee(&employee(
            "Anna",
            "Schmidt",
            Some("1990-12-25"),
            Some("2019-12-30"),
            Some("IT"),
        ))
        .unwrap();
    let jonas = source
        .insert_employee(&employee(
            "Jonas",
            "Becker",
            Some("1985-01-01"),
            Some("2020-12-21"),
            Some("HR"),
        ))
        .unwrap();
    let mia = source
        .insert_employee(&employee("Mia", "Krause", Some("25.12.1992"), None, None))
        .unwrap();
    let paul = source
        .insert_employee(&employee("Paul", "Wolf", Some("1970-12-22"), None, Some("IT")))
        .unwrap();
    source
        .set_employee_status(paul.id, EmployeeStatus::Inactive)
        .unwrap();

    source
        .insert_leave(jonas.id, "2024-12-23", "2025-01-03", ApprovalState::Approved)
        .unwrap();
    source
        .insert_leave(anna.id, "2024-12-27", "2024-12-31", ApprovalState::Requested)
        .unwrap();
    source
        .insert_leave(mia.id, "2024-12-16", "2024-12-20", ApprovalState::Approved)
        .unwrap();
    source
        .insert_sick_leave(anna.id, "2024-12-19", "2024-12-20", true)
        .unwrap();

    source
}

fn router_for(source: Arc<dyn RecordSource>) -> Router {
    create_router(AppState::new(ConfigLoader::default(), source))
}

fn create_router_for_test() -> Router {
    router_for(Arc::new(seeded_source()))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

// =============================================================================
// SECTION 1: Upcoming events
// =============================================================================

#[tokio::test]
async fn test_events_lists_birthdays_anniversaries_and_leave() {
    let (status, result) = get_json(create_router_for_test(), "/events?today=2024-12-20").await;

    assert_eq!(status, StatusCode::OK);
    let events = result["events"].as_array().unwrap();
    let descriptions: Vec<&str> = events
        .iter()
        .map(|e| e["description"].as_str().unwrap())
        .collect();

    assert_eq!(
        descriptions,
        vec![
            "Jonas Becker is on leave",
            "Birthday of Anna Schmidt",
            "5-year anniversary of Anna Schmidt",
            "Birthday of Jonas Becker",
        ]
    );
    assert_eq!(events[0]["display_date"], "23.12.2024 - 03.01.2025");
    assert_eq!(events[0]["category"], "upcoming_leave");
    assert_eq!(events[1]["date"], "2024-12-25");
    assert_eq!(events[1]["days_until"], 5);
}

#[tokio::test]
async fn test_events_report_skipped_records() {
    let (status, result) = get_json(create_router_for_test(), "/events?today=2024-12-20").await;

    assert_eq!(status, StatusCode::OK);
    let skipped = result["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["field"], "birth_date");
    assert_eq!(skipped[0]["value"], "25.12.1992");
}

#[tokio::test]
async fn test_events_sorted_and_bounded() {
    let (_, result) = get_json(create_router_for_test(), "/events?today=2024-12-20").await;

    let dates: Vec<&str> = result["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert!(dates.len() <= 10);
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_events_without_today_uses_local_date() {
    let (status, result) = get_json(create_router_for_test(), "/events").await;
    assert_eq!(status, StatusCode::OK);
    assert!(result["events"].is_array());
}

#[tokio::test]
async fn test_events_malformed_today_is_parse_error() {
    let (status, result) = get_json(create_router_for_test(), "/events?today=20.12.2024").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "PARSE_ERROR");
}

#[tokio::test]
async fn test_events_on_empty_source_is_empty_list() {
    let router = router_for(Arc::new(InMemorySource::default()));
    let (status, result) = get_json(router, "/events?today=2024-12-20").await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_events_on_unavailable_source_is_service_unavailable() {
    let source = InMemorySource::default();
    source.set_offline(true);
    let router = router_for(Arc::new(source));

    let (status, result) = get_json(router, "/events?today=2024-12-20").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(result["code"], "SOURCE_UNAVAILABLE");
}

// =============================================================================
// SECTION 2: Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_summary() {
    let (status, result) = get_json(create_router_for_test(), "/dashboard?today=2024-12-20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["today"], "2024-12-20");
    assert_eq!(result["active_employees"], 3);
    assert_eq!(result["on_vacation_today"], 1);
    assert_eq!(result["on_sick_leave_today"], 1);
    assert_eq!(result["birthdays_this_month"], 1);
    assert_eq!(result["headcount_by_department"]["IT"], 1);
    assert_eq!(result["headcount_by_department"]["HR"], 1);
    assert_eq!(result["headcount_by_department"]["Other"], 1);

    // Approved December leave: Mia 16-20 (5) and Jonas 23.12-03.01 (10 business days)
    assert_eq!(result["vacation_days_by_month"][11], 15);
    assert_eq!(result["sick_days_by_month"][11], 2);
}

// =============================================================================
// SECTION 3: Leave balance
// =============================================================================

#[tokio::test]
async fn test_leave_balance() {
    let router = create_router_for_test();
    // Jonas Becker is the second employee inserted.
    let (status, result) = get_json(router, "/employees/2/leave-balance?year=2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["entitlement"], 30);
    assert_eq!(result["taken"], 10);
    assert_eq!(result["pending"], 0);
    assert_eq!(result["remaining"], 20);
}

#[tokio::test]
async fn test_leave_balance_counts_pending_requests() {
    let (status, result) =
        get_json(create_router_for_test(), "/employees/1/leave-balance?year=2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["taken"], 0);
    assert_eq!(result["pending"], 3);
}

#[tokio::test]
async fn test_leave_balance_unknown_employee() {
    let (status, result) =
        get_json(create_router_for_test(), "/employees/99/leave-balance?year=2024").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(result["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// SECTION 4: Span
// =============================================================================

#[tokio::test]
async fn test_span_including_weekends() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/span",
        json!({"start": "2024-01-01", "end": "2024-01-07", "include_weekends": true}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days"], 7);
}

#[tokio::test]
async fn test_span_business_days() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/span",
        json!({"start": "2024-01-01", "end": "2024-01-07", "include_weekends": false}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days"], 5);
}

#[tokio::test]
async fn test_span_reversed_range_passes_through() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/span",
        json!({"start": "2024-01-07", "end": "2024-01-01", "include_weekends": false}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days"], 0);
}

#[tokio::test]
async fn test_span_malformed_date() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/span",
        json!({"start": "2024-01-01", "end": "soon"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "PARSE_ERROR");
}

#[tokio::test]
async fn test_span_missing_field() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/span",
        json!({"start": "2024-01-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_span_invalid_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/span")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// SECTION 5: Working time
// =============================================================================

#[tokio::test]
async fn test_working_time_hours() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/working-time",
        json!({
            "date": "2024-12-20",
            "start_time": "08:15",
            "end_time": "17:00",
            "break_minutes": 45
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let hours: Decimal = result["hours"].as_str().unwrap().parse().unwrap();
    assert_eq!(hours, Decimal::new(8, 0));
}

#[tokio::test]
async fn test_working_time_end_before_start() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/working-time",
        json!({
            "date": "2024-12-20",
            "start_time": "17:00",
            "end_time": "08:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_WORKING_TIME");
}
