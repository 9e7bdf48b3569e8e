//! Test fixtures and factory functions for creating test data.
//!
//! Expiry years are computed relative to the current date so that records
//! meant to be valid stay valid as the calendar moves on.

use chrono::{Datelike, Utc};
use serde_json::json;

/// A card number that passes the default length policy.
pub const VALID_NUMBER: &str = "4111111111111111";

/// Expiry year safely inside the default look-ahead window.
pub fn future_year() -> i32 {
    Utc::now().year() + 2
}

/// One well-formed record, valid under the default policy.
pub fn valid_record() -> String {
    format!("{}|12|{}|123", VALID_NUMBER, future_year())
}

/// Record with an out-of-range month.
pub fn bad_month_record() -> String {
    format!("{}|13|{}|123", VALID_NUMBER, future_year())
}

/// Record with a long-past expiry year.
pub fn expired_record() -> String {
    format!("{}|01|2000|123", VALID_NUMBER)
}

/// Record with a 2-digit CVV.
pub fn short_cvv_record() -> String {
    format!("{}|12|{}|12", VALID_NUMBER, future_year())
}

/// Log-style text with one valid and one expired record on separate lines.
pub fn mixed_log() -> String {
    format!(
        "2025-01-02 order accepted {}\nnoise line\n2025-01-03 retry {}\n",
        valid_record(),
        expired_record()
    )
}

/// Create a scan request body.
pub fn scan_request(text: &str) -> serde_json::Value {
    json!({ "text": text })
}
