// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod index;
mod status;

pub use health::{HealthResponse, health_check};
pub use index::index_page;
pub use status::{StatusResponse, status_handler};

use chrono::{SecondsFormat, Utc};

/// Current UTC time as `2025-01-01T12:00:00.000Z`
pub(crate) fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'), "unexpected timestamp: {ts}");
        assert_eq!(ts.len(), "2025-01-01T12:00:00.000Z".len());
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
