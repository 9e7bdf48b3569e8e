//! Scan history endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/scans
/// List stored scans, newest first
pub async fn list(State(state): State<AppState>) -> Result<Json<HistoryResponse>> {
    let scans = state.store.recent().await;

    Ok(Json(HistoryResponse {
        scans: scans.iter().map(|s| s.summary()).collect(),
    }))
}

/// GET /api/scans/{id}
/// Fetch one stored scan with its entries
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScanResponse>> {
    let stored = state
        .store
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("scan {}", id)))?;

    Ok(Json(stored.to_response()))
}

/// DELETE /api/scans
/// Clear the stored history
pub async fn clear(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let cleared = state.store.clear().await;

    Ok(Json(serde_json::json!({ "cleared": cleared })))
}
