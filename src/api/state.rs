// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Application state shared across HTTP handlers

use std::time::{Duration, Instant};

use crate::config::Config;

/// Shared application state
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub started_at: Instant,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }

    /// Time elapsed since the state was created
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_is_monotonic() {
        let state = AppState::new(Config::default());
        let first = state.uptime();
        let second = state.uptime();
        assert!(second >= first);
    }
}
