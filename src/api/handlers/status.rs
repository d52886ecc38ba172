use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::timestamp_now;
use crate::api::AppState;

pub const SERVICE_NAME: &str = "WildDuck Email Suite";
pub const SERVICE_VERSION: &str = "1.0.0";

/// Status endpoint response structure
///
/// `hostname` and `domain` are left out of the body when not configured.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub service: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub environment: String,
    pub timestamp: String,
}

/// GET /status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let config = &state.config;
    let response = StatusResponse {
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        hostname: config.hostname.clone(),
        domain: config.domain.clone(),
        environment: config.environment.clone(),
        timestamp: timestamp_now(),
    };
    tracing::debug!("/status served");

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_status_handler() {
        let state = Arc::new(AppState::new(Config::default()));
        let response = status_handler(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let response = StatusResponse {
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            hostname: None,
            domain: Some("example.com".to_string()),
            environment: "development".to_string(),
            timestamp: "2025-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("hostname").is_none());
        assert_eq!(json["domain"], "example.com");
    }
}
