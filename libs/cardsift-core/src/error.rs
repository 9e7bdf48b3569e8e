//! Error types for cardsift-core.

use thiserror::Error;

/// Result type alias using ScanError.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors at the input and export boundaries.
///
/// Field-level validation failures are never errors; they are recorded on
/// the [`CardEntry`](crate::types::CardEntry) produced for the candidate.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("file content is not decodable as text")]
    InvalidEncoding,

    #[error("unsupported file extension {extension:?}")]
    UnsupportedExtension { extension: String },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}
