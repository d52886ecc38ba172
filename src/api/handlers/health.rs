use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::timestamp_now;
use crate::api::AppState;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Seconds since startup
    pub uptime: f64,
    pub environment: String,
}

/// GET /health
///
/// Liveness probe for monitoring. Always returns "healthy" together with the
/// process uptime and the configured environment.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: timestamp_now(),
        uptime: state.uptime().as_secs_f64(),
        environment: state.config.environment.clone(),
    };
    tracing::debug!("/health uptime={:.3}s", response.uptime);

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(AppState::new(Config::default()));
        let response = health_check(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
