//! HTTP API module for the rent proration service.
//!
//! This module provides the REST API endpoints: a service banner, a health
//! check and the proration calculation.

mod handlers;
mod request;
mod response;
mod server;
mod state;

pub use handlers::{CALCULATE_PATH, HEALTH_PATH, create_router};
pub use request::{DATE_FORMAT, ProrationRequest, ValidatedRequest};
pub use response::{ApiError, ApiErrorResponse, EndpointsInfo, HealthResponse, IndexResponse};
pub use server::{serve, start_server};
pub use state::AppState;
