//! HTTP request handlers for the rent proration API.
//!
//! This module contains the router and the handler functions for all API
//! endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_proration;

use super::request::ProrationRequest;
use super::response::{
    ApiError, ApiErrorResponse, EndpointsInfo, HealthResponse, IndexResponse,
};
use super::state::AppState;

/// Path of the health check endpoint.
pub const HEALTH_PATH: &str = "/health";
/// Path of the proration endpoint.
pub const CALCULATE_PATH: &str = "/calculate-proration";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(HEALTH_PATH, get(health_handler))
        .route(CALCULATE_PATH, post(calculate_proration_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for GET / endpoint.
async fn index_handler() -> impl IntoResponse {
    json_response(
        StatusCode::OK,
        IndexResponse {
            message: "Rent proration API".to_string(),
            status: "running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: EndpointsInfo {
                health: HEALTH_PATH.to_string(),
                calculate: CALCULATE_PATH.to_string(),
            },
        },
    )
}

/// Handler for GET /health endpoint.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "healthy".to_string(),
            environment: state.config().environment.clone(),
        },
    )
}

/// Handler for POST /calculate-proration endpoint.
///
/// Validates the request at the boundary, runs the calculator and returns
/// the proration result.
async fn calculate_proration_handler(
    payload: Result<Json<ProrationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing proration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Rejected request body"
            );
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let input = match request.validate() {
        Ok(input) => input,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Request validation failed"
            );
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let start_time = Instant::now();
    match calculate_proration(
        input.monthly_rent,
        input.start_date,
        input.end_date,
        &input.month_year,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                month_year = %input.month_year,
                days_occupied = result.days_occupied,
                days_in_month = result.days_in_month,
                prorated_amount = %result.prorated_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Proration completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Proration failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Translates a JSON extraction failure into a client error body.
fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => ApiError::validation_error(err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
