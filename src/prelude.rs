// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use mailsuite_status::prelude::*;
//! ```

pub use crate::api::handlers::{HealthResponse, StatusResponse};
pub use crate::api::{AppState, create_router};
pub use crate::config::{Config, FallbackChain};
pub use crate::error::{AppError, Result};
pub use crate::shutdown::{ShutdownSignal, shutdown_signal};
