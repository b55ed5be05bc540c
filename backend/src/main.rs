//! Weight Loss Calculator Backend
//!
//! Projects bodyweight and BMI forward under four fixed weekly loss rates.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Request resolution, CSV export
//! - Shared crate: BMI classification and trajectory projection

use anyhow::Result;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weight_loss_backend::{config, routes, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();
    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        default_week_count = config.calculator.default_week_count,
        "Starting Weight Loss Calculator Backend"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = routes::create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Log filter used when RUST_LOG is unset
fn default_log_filter(production: bool) -> &'static str {
    if production {
        "weight_loss_backend=info,tower_http=info"
    } else {
        "weight_loss_backend=debug,tower_http=debug"
    }
}

/// Initialize tracing: JSON lines in production, pretty output otherwise
fn init_tracing() {
    let production = config::AppConfig::is_production();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_log_filter(production).into());

    let registry = tracing_subscriber::registry().with(env_filter);
    if production {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use signal::unix::{signal as unix_signal, SignalKind};

        match unix_signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = signal::ctrl_c() => info!("Received Ctrl+C, draining connections"),
                    _ = sigterm.recv() => info!("Received SIGTERM, draining connections"),
                }
            }
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable, waiting for Ctrl+C only");
                let _ = signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = signal::ctrl_c().await;
        info!("Received Ctrl+C, draining connections");
    }
}
