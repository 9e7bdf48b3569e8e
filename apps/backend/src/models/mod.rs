//! API models and stored-scan types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from cardsift-core
pub use cardsift_core::types::{
    CardCandidate, CardEntry, InvalidReason, ScanPolicy, ScanReport, ScanStats,
};

// === Stored Scan Types ===

/// Where the scanned text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    Pasted,
    Upload,
}

/// A scan held in the in-memory history.
#[derive(Debug, Clone)]
pub struct StoredScan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source: ScanSource,
    pub filename: Option<String>,
    /// SHA256 of the scanned text, so history rows identify their input
    /// without retaining it.
    pub input_hash: String,
    pub report: ScanReport,
}

impl StoredScan {
    /// Convert to a history row without entries.
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            scan_id: self.id,
            created_at: self.created_at,
            source: self.source,
            filename: self.filename.clone(),
            input_hash: self.input_hash.clone(),
            stats: self.report.stats,
        }
    }

    /// Convert to the full API response with entries.
    pub fn to_response(&self) -> ScanResponse {
        ScanResponse {
            scan_id: self.id,
            created_at: self.created_at,
            source: self.source,
            filename: self.filename.clone(),
            entries: self.report.entries.clone(),
            stats: self.report.stats,
        }
    }
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    pub scan_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source: ScanSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub entries: Vec<CardEntry>,
    pub stats: ScanStats,
}

/// History row: provenance and counts, no entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub scan_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source: ScanSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub input_hash: String,
    pub stats: ScanStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub scans: Vec<ScanSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadParams {
    pub filename: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
    pub valid_only: Option<bool>,
}
