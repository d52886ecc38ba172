// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Mail suite status
//!
//! HTTP status page for a WildDuck mail suite deployment.
//!
//! Serves a landing page, a health probe and a status document built from a
//! configuration snapshot taken at startup. It never talks to the mail
//! services it describes.
//!
//! ## Main modules
//! - `api`: HTTP router, state and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `shutdown`: termination signal handling
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
pub mod prelude;
mod shutdown;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, FallbackChain, defaults, env_vars};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state and response bodies
pub use api::handlers::{HealthResponse, StatusResponse};
pub use api::{AppState, create_router};

/// Termination signal handling
pub use shutdown::{ShutdownSignal, shutdown_signal};
