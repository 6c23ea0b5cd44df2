// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_source::HttpSalesSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sales_dashboard=info,tower_http=info".into()),
        )
        .init();

    let config = load_dashboard_config()?;

    // Source (infrastructure layer)
    let source = Arc::new(HttpSalesSource::new(
        config.source.base_url,
        config.source.timeout_secs,
    )?);

    // Services (application layer)
    let dashboard_service = DashboardService::new(source, config.display.currency_prefix);

    let state = Arc::new(AppState { dashboard_service });

    // Router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.server.listen.parse()?;
    tracing::info!("Starting sales-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
