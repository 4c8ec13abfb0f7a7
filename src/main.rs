use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ninebox_intelligence::adapters::http::{build_router, IntelligenceAppState};
use ninebox_intelligence::config::AppConfig;
use ninebox_intelligence::domain::intelligence::AnalysisRegistry;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Server terminated");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config = match std::env::var("NINEBOX_CONFIG_FILE") {
        Ok(path) => AppConfig::load_with_file(path)?,
        Err(_) => AppConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let thresholds = config.intelligence.to_thresholds();
    let registry = Arc::new(AnalysisRegistry::standard(&thresholds));
    tracing::info!(
        dimensions = ?registry.names().collect::<Vec<_>>(),
        min_sample_size = thresholds.min_sample_size,
        "Analysis registry composed"
    );

    let app = build_router(IntelligenceAppState::new(registry), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
