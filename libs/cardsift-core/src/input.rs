//! Upload decoding.

use crate::error::{Result, ScanError};

/// File extensions accepted for upload, lowercase.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["txt", "log", "csv"];

/// Decode uploaded bytes as text.
///
/// The extension gate runs before decoding so callers get the more
/// specific error for a wrong file type. Extension matching is
/// case-insensitive.
pub fn decode_upload(filename: &str, bytes: Vec<u8>) -> Result<String> {
    let extension = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    };

    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ScanError::UnsupportedExtension { extension });
    }

    String::from_utf8(bytes).map_err(|_| ScanError::InvalidEncoding)
}
