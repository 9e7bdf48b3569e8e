//! Result download endpoint

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use uuid::Uuid;

use cardsift_core::{download_filename, render, ExportFormat};

use crate::error::{ApiError, Result};
use crate::models::ExportParams;
use crate::AppState;

/// GET /api/scans/{id}/export?format=pipe|csv|json&valid_only=true
/// Download a stored scan's results as a file attachment
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<ExportParams>,
) -> Result<Response> {
    let format = match params.format.as_deref() {
        Some(name) => ExportFormat::from_str(name)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown export format '{}'", name)))?,
        None => ExportFormat::default(),
    };

    let stored = state
        .store
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("scan {}", id)))?;

    let report = if params.valid_only.unwrap_or(false) {
        stored.report.only_valid()
    } else {
        stored.report
    };

    let now = Utc::now();
    let body = render(&report, format, now)?;
    let filename = download_filename(format, now);

    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((StatusCode::OK, headers, body).into_response())
}
