//! Pattern scan over raw text.
//!
//! # Record shape
//! ```text
//! 4111111111111111|12|2027|123
//! ```
//!
//! Month and year are fixed-width (2 and 4 digits). Number and CVV match
//! any ASCII digit run: their accepted lengths are a validation concern,
//! so an out-of-range length surfaces as an invalid entry instead of the
//! record being silently skipped. Non-ASCII numerals never form a record.

use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{CardCandidate, ScanPolicy, ScanReport};
use crate::validate;

static CARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<number>[0-9]+)\|(?P<month>[0-9]{2})\|(?P<year>[0-9]{4})\|(?P<cvv>[0-9]+)")
        .unwrap()
});

/// Lazy iterator over candidates, in order of appearance.
///
/// Borrows the input text; restartable by calling [`candidates`] again on
/// the same text.
pub struct Candidates<'t> {
    text: &'t str,
    matches: regex::CaptureMatches<'static, 't>,
    last_offset: usize,
    line: usize,
}

impl<'t> Iterator for Candidates<'t> {
    type Item = CardCandidate;

    fn next(&mut self) -> Option<CardCandidate> {
        let caps = self.matches.next()?;
        let start = caps.get(0)?.start();

        self.line += self.text[self.last_offset..start]
            .bytes()
            .filter(|&b| b == b'\n')
            .count();
        self.last_offset = start;

        Some(CardCandidate {
            number: caps["number"].to_string(),
            exp_month: caps["month"].to_string(),
            exp_year: caps["year"].to_string(),
            cvv: caps["cvv"].to_string(),
            line_number: self.line,
        })
    }
}

/// Scan text for non-overlapping candidate records.
pub fn candidates(text: &str) -> Candidates<'_> {
    Candidates {
        text,
        matches: CARD_PATTERN.captures_iter(text),
        last_offset: 0,
        line: 1,
    }
}

/// Run one extraction pass with `today` as the reference date.
///
/// Never fails: text with no matches yields an empty report with zero
/// counts. Deterministic for a given text, policy and date.
pub fn scan_at(text: &str, policy: &ScanPolicy, today: NaiveDate) -> ScanReport {
    let mut report = ScanReport::default();
    for candidate in candidates(text) {
        report.push(validate::check(candidate, policy, today));
    }
    report
}

/// Run one extraction pass dated today (UTC).
pub fn scan(text: &str, policy: &ScanPolicy) -> ScanReport {
    scan_at(text, policy, Utc::now().date_naive())
}
