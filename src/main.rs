//! Obesity Advisor server binary.
//!
//! Loads configuration and model artifacts, then serves the HTTP API until
//! Ctrl-C or SIGTERM. Any startup failure exits non-zero before binding.

use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use obesity_advisor::adapters::artifacts::{ArtifactLoader, FatalLoadError};
use obesity_advisor::adapters::http::{app_router, PredictAppState};
use obesity_advisor::config::{AppConfig, ValidationError};

#[derive(Debug, Error)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValidationError),

    #[error(transparent)]
    Artifacts(#[from] FatalLoadError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info", false);
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server.log_level, config.is_production());

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Startup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate()?;
    let addr = config.server.socket_addr()?;

    let artifacts = ArtifactLoader::load(&config.artifacts).await?;
    tracing::info!(?artifacts, "Model artifacts ready");

    let state = PredictAppState::new(Arc::new(artifacts));
    let app = app_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
