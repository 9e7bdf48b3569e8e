//! Scan endpoints

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};

use cardsift_core::{decode_upload, scan};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/scan
/// Scan pasted text for card-shaped records
pub async fn scan_text(
    State(state): State<AppState>,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<ScanResponse>> {
    let report = scan(&payload.text, &state.policy);

    tracing::info!(
        "Scanned pasted text: {} candidates, {} valid",
        report.stats.total,
        report.stats.valid
    );

    let stored = state
        .store
        .insert(ScanSource::Pasted, None, &payload.text, report)
        .await;

    Ok(Json(stored.to_response()))
}

/// POST /api/scan/upload?filename=...
/// Decode an uploaded file and scan its contents
pub async fn scan_upload(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<ScanResponse>> {
    let text = decode_upload(&params.filename, body.to_vec())?;
    let report = scan(&text, &state.policy);

    tracing::info!(
        "Scanned {}: {} candidates, {} valid",
        params.filename,
        report.stats.total,
        report.stats.valid
    );

    let stored = state
        .store
        .insert(ScanSource::Upload, Some(params.filename), &text, report)
        .await;

    Ok(Json(stored.to_response()))
}
