//! Core card extraction library shared by the backend application.
//!
//! Provides:
//! - Regex scanner producing candidate records in order of appearance
//! - Field validation (number length, month range, expiry, CVV length)
//! - Report aggregation with total/valid/invalid counts
//! - Export serialization (pipe-delimited, CSV, JSON) for downloads
//! - Upload decoding with an accepted-extension gate

pub mod error;
pub mod export;
pub mod input;
pub mod scanner;
pub mod types;
pub mod validate;

pub use error::{Result, ScanError};
pub use export::{download_filename, render, ExportFormat};
pub use input::{decode_upload, ACCEPTED_EXTENSIONS};
pub use scanner::{candidates, scan, scan_at, Candidates};
pub use types::{
    CardCandidate, CardEntry, InvalidReason, ScanPolicy, ScanReport, ScanStats, FIELD_DELIMITER,
};
