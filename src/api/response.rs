//! Response types for the rent proration API.
//!
//! This module defines the informational response bodies, the error
//! response structure and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Names of the request fields the error concerns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an error listing every required field absent from the request.
    pub fn missing_fields(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            ..Self::new(
                "MISSING_FIELDS",
                format!("Missing fields: {}", fields.join(", ")),
            )
        }
    }

    /// Creates an error for a date string that is not `YYYY-MM-DD`.
    pub fn invalid_date(field: &str, value: &str) -> Self {
        Self {
            fields: vec![field.to_string()],
            ..Self::with_details(
                "INVALID_DATE",
                format!("Invalid date for '{}': '{}'", field, value),
                "Dates must use the YYYY-MM-DD format",
            )
        }
    }

    /// Creates an error for a negative monthly rent.
    pub fn invalid_rent(amount: Decimal) -> Self {
        Self {
            fields: vec!["monthly_rent".to_string()],
            ..Self::new(
                "INVALID_RENT",
                format!("Monthly rent must not be negative, got {}", amount),
            )
        }
    }

    /// Creates the generic internal error response.
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "Internal server error")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a `400 Bad Request` response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidMonthFormat { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_MONTH_FORMAT",
                    error.to_string(),
                    "The target month must be a valid YYYY-MM month",
                ),
            ),
            EngineError::InvalidDateRange { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    error.to_string(),
                    "The occupancy start date must be on or before its end date",
                ),
            ),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfigValue { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::internal(),
            },
        }
    }
}

/// Endpoint map returned by the index route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsInfo {
    /// Path of the health check.
    pub health: String,
    /// Path of the proration calculation.
    pub calculate: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    /// Service banner.
    pub message: String,
    /// Always `"running"`.
    pub status: String,
    /// Crate version serving the request.
    pub version: String,
    /// Available endpoints.
    pub endpoints: EndpointsInfo,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
    /// The configured deployment environment.
    pub environment: String,
}
