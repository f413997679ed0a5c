//! Health check endpoint for monitoring and readiness probes

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::{error::ApiError, routes::ApiState},
    storage::check_connection,
};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status (always "ok" when responding)
    #[schema(example = "ok")]
    pub status: String,
}

/// Health check endpoint
///
/// Returns 200 OK when the API server is up and the database answers a
/// trivial query, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health_handler(
    State(state): State<ApiState>,
) -> Result<(StatusCode, Json<HealthResponse>), ApiError> {
    check_connection(&state.pool).await.map_err(|e| {
        tracing::warn!(error = %e, "Health check failed");
        ApiError::service_unavailable("Database unavailable")
    })?;

    Ok((StatusCode::OK, Json(HealthResponse { status: "ok".to_string() })))
}
