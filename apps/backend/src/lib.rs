pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cardsift_core::ScanPolicy;

use crate::services::store::ScanStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ScanStore>,
    pub policy: ScanPolicy,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let history_limit = std::env::var("SCAN_HISTORY_LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(50);

    let mut policy = ScanPolicy::default();
    if let Some(lookahead) = std::env::var("CARDSIFT_YEAR_LOOKAHEAD")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        policy.year_lookahead = lookahead;
    }

    tracing::info!("Keeping the last {} scans in history", history_limit);

    let state = AppState {
        store: Arc::new(ScanStore::new(history_limit)),
        policy,
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/scan", post(routes::scan::scan_text))
        .route("/api/scan/upload", post(routes::scan::scan_upload))
        .route("/api/scans", get(routes::history::list))
        .route("/api/scans", delete(routes::history::clear))
        .route("/api/scans/{id}", get(routes::history::detail))
        .route("/api/scans/{id}/export", get(routes::export::download))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
