//! Field validation rules.
//!
//! Checks run in a fixed order and the first failure wins, so an entry
//! carries at most one reason. Invalid candidates are data, not errors:
//! validation always produces an entry.

use chrono::{Datelike, NaiveDate};

use crate::types::{CardCandidate, CardEntry, InvalidReason, ScanPolicy};

/// Validate one candidate against `policy`, with `today` as the reference
/// date for expiry checks.
pub fn check(candidate: CardCandidate, policy: &ScanPolicy, today: NaiveDate) -> CardEntry {
    let reason = first_failure(&candidate, policy, today);

    CardEntry {
        number: candidate.number,
        exp_month: candidate.exp_month,
        exp_year: candidate.exp_year,
        cvv: candidate.cvv,
        line_number: candidate.line_number,
        valid: reason.is_none(),
        reason,
    }
}

fn first_failure(
    candidate: &CardCandidate,
    policy: &ScanPolicy,
    today: NaiveDate,
) -> Option<InvalidReason> {
    // Policy ranges are digit counts, so measure characters, not bytes.
    let number_len = candidate.number.chars().count();
    if number_len < policy.min_number_len || number_len > policy.max_number_len {
        return Some(InvalidReason::NumberLength);
    }

    // The scanner only emits digit fields, but candidates can also be built
    // by hand, so parse failures map to the matching range reason.
    let month: u32 = match candidate.exp_month.parse() {
        Ok(m) => m,
        Err(_) => return Some(InvalidReason::MonthOutOfRange),
    };
    if !(1..=12).contains(&month) {
        return Some(InvalidReason::MonthOutOfRange);
    }

    let year: i32 = match candidate.exp_year.parse() {
        Ok(y) => y,
        Err(_) => return Some(InvalidReason::YearTooFar),
    };
    if year > today.year() + policy.year_lookahead {
        return Some(InvalidReason::YearTooFar);
    }
    // Cards expire at the end of their month, so the current month is
    // still valid.
    if year < today.year() || (year == today.year() && month < today.month()) {
        return Some(InvalidReason::Expired);
    }

    let cvv_len = candidate.cvv.chars().count();
    if cvv_len < policy.min_cvv_len || cvv_len > policy.max_cvv_len {
        return Some(InvalidReason::CvvLength);
    }

    None
}
