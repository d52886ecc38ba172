// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the mail suite status service
//!
//! # Endpoints
//! - `GET /` — HTML landing page
//! - `GET /health` — health check
//! - `GET /status` — service status

pub mod handlers;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index_page))
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::status_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new(Config::default());

        assert_eq!(state.config.port, 8080);
        assert_eq!(state.config.environment, "development");
    }
}
