// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::csv_repository::CsvTransactionRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load configuration")?;
    let addr = config.server.socket_addr()?;

    // Load the dataset once; the server does not start without it
    let source = CsvTransactionRepository::new(
        config.dataset.path.clone(),
        config.dataset.date_formats.clone(),
    );
    let dashboard_service = DashboardService::load(&source, config.charts).await?;

    let state = Arc::new(AppState { dashboard_service });
    let router = build_router(state);

    tracing::info!("Starting sales dashboard on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router).await?;

    Ok(())
}
