//! Chronological ordering policy for transaction records.
//!
//! Sources do not guarantee arrival order, so the trajectory walk sorts first.
//!
//! # Sort key
//!
//! `timestamp` ascending, nothing else. Records sharing a timestamp keep
//! their relative input order: the source data has no secondary key, so a
//! stable sort is the only deterministic choice.

use crate::TransactionRecord;

/// Stable sort of record references by timestamp, in place.
pub fn sort_chronological(records: &mut [&TransactionRecord]) {
    // slice::sort_by_key is stable.
    records.sort_by_key(|r| r.timestamp);
}

/// Borrowing chronological view of `records`; the input slice is untouched.
pub fn chronological(records: &[TransactionRecord]) -> Vec<&TransactionRecord> {
    let mut out: Vec<&TransactionRecord> = records.iter().collect();
    sort_chronological(&mut out);
    out
}
