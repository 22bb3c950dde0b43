//! Integration tests for the rent proration service.
//!
//! This test suite drives the HTTP API end to end:
//! - Partial, full and empty month occupancy
//! - Leap year handling
//! - Boundary validation (missing fields, malformed dates, negative rent)
//! - Calculator errors (invalid month, reversed dates)
//! - Informational endpoints
//! - A real TCP server with graceful shutdown

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tower::ServiceExt;

use rent_proration::api::{AppState, create_router, serve};
use rent_proration::config::ServerConfig;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::default())
}

async fn post_proration(body: Value) -> (StatusCode, Value) {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate-proration")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(rent: Value, start_date: &str, end_date: &str, month_year: &str) -> Value {
    json!({
        "monthly_rent": rent,
        "start_date": start_date,
        "end_date": end_date,
        "month_year": month_year
    })
}

fn assert_amount(result: &Value, field: &str, expected: f64) {
    let actual = result[field]
        .as_f64()
        .unwrap_or_else(|| panic!("{} is not a number: {}", field, result[field]));
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// Proration scenarios
// =============================================================================

#[tokio::test]
async fn test_partial_month_mid_january() {
    let (status, result) =
        post_proration(create_request(json!(3000), "2024-01-15", "2024-01-31", "2024-01")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days_in_month"], 31);
    assert_eq!(result["days_occupied"], 17);
    assert_amount(&result, "daily_rate", 96.77);
    assert_amount(&result, "prorated_amount", 1645.16);
    assert_amount(&result, "monthly_rent", 3000.0);
    let details = result["calculation_details"].as_str().unwrap();
    assert!(details.contains("2024-01-15"));
    assert!(details.contains("2024-01-31"));
    assert!(details.contains("17 of 31"));
}

#[tokio::test]
async fn test_no_overlap_reports_daily_rate() {
    let (status, result) =
        post_proration(create_request(json!(1000), "2024-03-01", "2024-03-31", "2024-02")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days_in_month"], 29);
    assert_eq!(result["days_occupied"], 0);
    assert_amount(&result, "prorated_amount", 0.0);
    assert_amount(&result, "daily_rate", 34.48);
    assert!(
        result["calculation_details"]
            .as_str()
            .unwrap()
            .contains("2024-02")
    );
}

#[tokio::test]
async fn test_full_month_within_year_long_lease() {
    let (status, result) =
        post_proration(create_request(json!(1200), "2024-01-01", "2024-12-31", "2024-06")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days_in_month"], 30);
    assert_eq!(result["days_occupied"], 30);
    assert_amount(&result, "prorated_amount", 1200.0);
}

#[tokio::test]
async fn test_february_common_year_has_28_days() {
    let (status, result) =
        post_proration(create_request(json!(2800), "2023-02-01", "2023-02-28", "2023-02")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days_in_month"], 28);
    assert_eq!(result["days_occupied"], 28);
    assert_amount(&result, "daily_rate", 100.0);
    assert_amount(&result, "prorated_amount", 2800.0);
}

#[tokio::test]
async fn test_fractional_rent() {
    let (status, result) =
        post_proration(create_request(json!(1234.56), "2024-04-16", "2024-05-20", "2024-04"))
            .await;

    // 1234.56 / 30 = 41.152; 41.152 * 15 = 617.28
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days_occupied"], 15);
    assert_amount(&result, "daily_rate", 41.15);
    assert_amount(&result, "prorated_amount", 617.28);
}

#[tokio::test]
async fn test_identical_requests_give_identical_results() {
    let request = create_request(json!(1850), "2023-11-20", "2024-02-10", "2024-02");
    let (_, first) = post_proration(request.clone()).await;
    let (_, second) = post_proration(request).await;

    assert_eq!(first, second);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_invalid_month_strings_are_rejected() {
    for month in ["2024-13", "abc", "2024-00", ""] {
        let (status, error) =
            post_proration(create_request(json!(1000), "2024-01-01", "2024-01-31", month)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "month {:?}", month);
        assert_eq!(error["code"], "INVALID_MONTH_FORMAT", "month {:?}", month);
    }
}

#[tokio::test]
async fn test_start_after_end_is_rejected() {
    let (status, error) =
        post_proration(create_request(json!(1000), "2024-02-10", "2024-02-01", "2024-02")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_empty_object_lists_all_fields() {
    let (status, error) = post_proration(json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MISSING_FIELDS");
    assert_eq!(
        error["fields"],
        json!(["monthly_rent", "start_date", "end_date", "month_year"])
    );
}

#[tokio::test]
async fn test_null_field_counts_as_missing() {
    let (status, error) = post_proration(json!({
        "monthly_rent": null,
        "start_date": "2024-01-01",
        "end_date": "2024-01-31",
        "month_year": "2024-01"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["fields"], json!(["monthly_rent"]));
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let (status, error) =
        post_proration(create_request(json!(1000), "2024-01-01", "31/01/2024", "2024-01")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_DATE");
    assert_eq!(error["fields"], json!(["end_date"]));
}

#[tokio::test]
async fn test_negative_rent_is_rejected() {
    let (status, error) =
        post_proration(create_request(json!(-500), "2024-01-01", "2024-01-31", "2024-01")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_RENT");
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let (status, error) = post_proration(json!([1, 2, 3])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Server
// =============================================================================

#[tokio::test]
async fn test_server_answers_health_over_tcp_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let state = AppState::new(ServerConfig {
        environment: "integration".to_string(),
        ..ServerConfig::default()
    });

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, state, async move {
        let _ = shutdown_rx.await;
    }));

    let mut stream = TcpStream::connect(address).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200"), "got: {}", response);
    assert!(response.contains("\"status\":\"healthy\""));
    assert!(response.contains("\"environment\":\"integration\""));

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
