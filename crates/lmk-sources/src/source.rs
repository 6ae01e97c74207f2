//! Source boundary for wallet and transaction data.
//!
//! This module defines **only** the traits, the error type, and the row
//! decoding step shared by every adapter. Adapters (JSON, CSV, in-memory)
//! live in sibling modules.
//!
//! A failed fetch is always an explicit `Err`; "no activity" is `Ok(vec![])`
//! and "no wallet" is [`SourceError::NotFound`]. Nothing here ever degrades
//! a failure into an empty or zero-balance portfolio.

use std::fmt;

use lmk_ledger::{RecordError, TransactionRecord, TransactionRow, WalletSnapshot};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors a source implementation may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The requested wallet (or export file) does not exist.
    NotFound(String),
    /// Reading the underlying medium failed.
    Io { origin: String, message: String },
    /// The payload could not be decoded into rows.
    Decode { origin: String, message: String },
    /// A row decoded but violates the record contract.
    InvalidRecord(RecordError),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound(what) => write!(f, "not found: {what}"),
            SourceError::Io { origin, message } => write!(f, "io error ({origin}): {message}"),
            SourceError::Decode { origin, message } => {
                write!(f, "decode error ({origin}): {message}")
            }
            SourceError::InvalidRecord(e) => write!(f, "invalid record: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::InvalidRecord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RecordError> for SourceError {
    fn from(e: RecordError) -> Self {
        SourceError::InvalidRecord(e)
    }
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Supplies the authenticated account's current wallet.
///
/// Object-safe and `Send + Sync` so callers can hold `Box<dyn WalletSource>`.
pub trait WalletSource: Send + Sync {
    /// Human-readable adapter name (e.g. `"json-file"`).
    fn name(&self) -> &'static str;

    fn fetch_wallet(&self) -> Result<WalletSnapshot, SourceError>;
}

/// Supplies the account's transaction history, in any order.
pub trait TransactionSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns records in the order the medium holds them; callers sort.
    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>, SourceError>;
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

/// Convert wire rows into records, rejecting the batch on the first bad row.
pub fn rows_to_records<I>(rows: I) -> Result<Vec<TransactionRecord>, SourceError>
where
    I: IntoIterator<Item = TransactionRow>,
{
    rows.into_iter()
        .map(|row| TransactionRecord::try_from(row).map_err(SourceError::from))
        .collect()
}
