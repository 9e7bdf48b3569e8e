//! Common test utilities and fixtures for integration tests.
//!
//! The scan store is in-memory, so every test gets a fresh, fully
//! in-process application with no external services to set up.

pub mod fixtures;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use cardsift_backend::routes;
use cardsift_backend::services::store::ScanStore;
use cardsift_backend::AppState;
use cardsift_core::ScanPolicy;

/// Test context holding the application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a new test context with an empty history and default policy.
    pub fn new() -> Self {
        Self::with_capacity(50)
    }

    /// Create a test context with a specific history capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let state = AppState {
            store: Arc::new(ScanStore::new(capacity)),
            policy: ScanPolicy::default(),
        };
        let app = build_test_router(state.clone());

        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Build the test router with all routes.
fn build_test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/scan", post(routes::scan::scan_text))
        .route("/api/scan/upload", post(routes::scan::scan_upload))
        .route("/api/scans", get(routes::history::list))
        .route("/api/scans", delete(routes::history::clear))
        .route("/api/scans/{id}", get(routes::history::detail))
        .route("/api/scans/{id}/export", get(routes::export::download))
        .with_state(state)
}
