//! Boundary between source wire rows and engine types.
//!
//! Sources hand over rows exactly as the backend exports them; this module
//! owns the invariant-checking step that turns them into
//! [`TransactionRecord`] / [`WalletSnapshot`]. The reconstructor itself
//! never validates, so malformed rows must be rejected here.

use chrono::{DateTime, Utc};
use lmk_money::Money;
use serde::{Deserialize, Serialize};

use crate::{TransactionRecord, TxKind, TxStatus, WalletSnapshot};

// ---------------------------------------------------------------------------
// Wire rows
// ---------------------------------------------------------------------------

/// Transaction row as exported by the backend.
///
/// `amount` is already in minor units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Wallet row as exported by the backend (`balance` in minor units).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRow {
    pub balance: i64,
    pub currency_code: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Row-level contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Transaction id must be non-empty.
    EmptyId,
    /// `type` must be `credit` or `debit`.
    UnknownKind { id: String, kind: String },
    /// `status` must be `completed` or `pending`.
    UnknownStatus { id: String, status: String },
    /// Amounts carry no sign; the kind does.
    NegativeAmount { id: String, amount: i64 },
    /// Wallet currency code must be non-empty.
    EmptyCurrency,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "record invariant: id must not be empty"),
            Self::UnknownKind { id, kind } => write!(
                f,
                "record invariant: tx {id} has unknown type '{kind}' (expected credit | debit)"
            ),
            Self::UnknownStatus { id, status } => write!(
                f,
                "record invariant: tx {id} has unknown status '{status}' (expected completed | pending)"
            ),
            Self::NegativeAmount { id, amount } => {
                write!(f, "record invariant: tx {id} amount must be >= 0, got {amount}")
            }
            Self::EmptyCurrency => {
                write!(f, "record invariant: wallet currency_code must not be empty")
            }
        }
    }
}

impl std::error::Error for RecordError {}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn parse_kind(id: &str, raw: &str) -> Result<TxKind, RecordError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "credit" => Ok(TxKind::Credit),
        "debit" => Ok(TxKind::Debit),
        _ => Err(RecordError::UnknownKind {
            id: id.to_string(),
            kind: raw.to_string(),
        }),
    }
}

fn parse_status(id: &str, raw: &str) -> Result<TxStatus, RecordError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "completed" => Ok(TxStatus::Completed),
        "pending" => Ok(TxStatus::Pending),
        _ => Err(RecordError::UnknownStatus {
            id: id.to_string(),
            status: raw.to_string(),
        }),
    }
}

impl TryFrom<TransactionRow> for TransactionRecord {
    type Error = RecordError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        if row.id.trim().is_empty() {
            return Err(RecordError::EmptyId);
        }
        let kind = parse_kind(&row.id, &row.kind)?;
        let status = parse_status(&row.id, &row.status)?;
        if row.amount < 0 {
            return Err(RecordError::NegativeAmount {
                id: row.id,
                amount: row.amount,
            });
        }
        Ok(TransactionRecord::new(
            row.id,
            row.created_at,
            kind,
            Money::from_minor(row.amount),
            status,
        ))
    }
}

impl TryFrom<WalletRow> for WalletSnapshot {
    type Error = RecordError;

    fn try_from(row: WalletRow) -> Result<Self, Self::Error> {
        let code = row.currency_code.trim();
        if code.is_empty() {
            return Err(RecordError::EmptyCurrency);
        }
        Ok(WalletSnapshot::new(
            Money::from_minor(row.balance),
            code.to_ascii_uppercase(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
