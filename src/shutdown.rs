// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process termination signals

use tokio::signal;

/// Signal that ended the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl std::fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("SIGINT"),
            ShutdownSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Waits for SIGINT (Ctrl+C) or, on Unix, SIGTERM
///
/// Fails only if a signal handler cannot be installed.
pub async fn shutdown_signal() -> std::io::Result<ShutdownSignal> {
    #[cfg(unix)]
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;

    #[cfg(unix)]
    let terminate = async move {
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        res = signal::ctrl_c() => res.map(|()| ShutdownSignal::Interrupt),
        () = terminate => Ok(ShutdownSignal::Terminate),
    }
}
