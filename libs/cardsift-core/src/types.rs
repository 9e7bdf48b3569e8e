//! Core types for card extraction and validation.

use serde::{Deserialize, Serialize};

/// Delimiter separating the four fields of a record.
pub const FIELD_DELIMITER: char = '|';

/// A raw match before validation.
///
/// Transient: produced by the scanner, consumed by validation. Fields hold
/// the digits exactly as they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCandidate {
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvv: String,
    /// Line of the input the match starts on (1-indexed).
    pub line_number: usize,
}

/// Why a candidate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    NumberLength,
    MonthOutOfRange,
    Expired,
    YearTooFar,
    CvvLength,
}

impl InvalidReason {
    /// Get the reason as a string (matches the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NumberLength => "number_length",
            Self::MonthOutOfRange => "month_out_of_range",
            Self::Expired => "expired",
            Self::YearTooFar => "year_too_far",
            Self::CvvLength => "cvv_length",
        }
    }

    /// Human-readable message for display next to an invalid entry.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NumberLength => "card number length out of range",
            Self::MonthOutOfRange => "expiry month out of range",
            Self::Expired => "card expired",
            Self::YearTooFar => "expiry year too far ahead",
            Self::CvvLength => "CVV length out of range",
        }
    }
}

/// A candidate after validation, tagged valid or invalid with a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvv: String,
    pub line_number: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<InvalidReason>,
}

impl CardEntry {
    /// Message describing the validation outcome.
    pub fn reason_message(&self) -> &'static str {
        match self.reason {
            Some(reason) => reason.message(),
            None => "valid",
        }
    }
}

/// Summary counts for one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Ordered entries plus summary counts from one extraction pass.
///
/// Entries keep the order of first appearance in the input; duplicate
/// records are preserved as found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub entries: Vec<CardEntry>,
    pub stats: ScanStats,
}

impl ScanReport {
    /// Append an entry and update the counts.
    pub fn push(&mut self, entry: CardEntry) {
        self.stats.total += 1;
        if entry.valid {
            self.stats.valid += 1;
        } else {
            self.stats.invalid += 1;
        }
        self.entries.push(entry);
    }

    /// Copy of this report keeping only valid entries, counts recomputed.
    pub fn only_valid(&self) -> Self {
        let mut filtered = Self::default();
        for entry in self.entries.iter().filter(|e| e.valid) {
            filtered.push(entry.clone());
        }
        filtered
    }
}

/// Validity thresholds for field checks.
///
/// These are policy ranges, not payment-network rules: no checksum or
/// issuer lookup happens anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanPolicy {
    /// Smallest accepted card number digit count.
    pub min_number_len: usize,
    /// Largest accepted card number digit count.
    pub max_number_len: usize,
    /// Smallest accepted CVV digit count.
    pub min_cvv_len: usize,
    /// Largest accepted CVV digit count.
    pub max_cvv_len: usize,
    /// How many years past the current year an expiry may lie.
    pub year_lookahead: i32,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            min_number_len: 13,
            max_number_len: 19,
            min_cvv_len: 3,
            max_cvv_len: 4,
            year_lookahead: 15,
        }
    }
}
