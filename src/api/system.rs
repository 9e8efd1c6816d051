use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, HealthDto};

/// `GET /health`
///
/// Readiness probe; round-trips a trivial query through the pool.
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthDto>, ApiError> {
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    Ok(Json(HealthDto {
        status: "ok",
        uptime_seconds: state.start_time.elapsed().as_secs(),
    }))
}
