use std::future::IntoFuture;
use std::sync::Arc;

use mailsuite_status::defaults;
use mailsuite_status::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Before tracing so RUST_LOG can come from .env
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Hostname: {}", config.hostname_or(defaults::LOCALHOST));
    tracing::info!("Mail domain: {}", config.domain_or(defaults::LOCALHOST));

    let addr = config.listen_addr().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Mail suite status page starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /        - Landing page");
    tracing::info!("  - GET /health  - Health check");
    tracing::info!("  - GET /status  - Service status");

    // In-flight requests are not drained: the server future is dropped as soon as a signal arrives
    tokio::select! {
        res = axum::serve(listener, app).into_future() => {
            res.map_err(|e| {
                tracing::error!("Server error: {}", e);
                e
            })?;
        }
        signal = shutdown_signal() => {
            let signal = signal.map_err(|e| {
                tracing::error!("Failed to install signal handler: {}", e);
                e
            })?;
            tracing::info!("Received {}, shutting down", signal);
        }
    }

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; "info" otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
