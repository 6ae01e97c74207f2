use chrono::{DateTime, Utc};
use lmk_money::Money;
use serde::{Deserialize, Serialize};

/// Direction of a wallet movement. The amount itself is always >= 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Credit,
    Debit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Completed,
    Pending,
}

/// A single wallet transaction (the accounting atom). Never edited once built.
///
/// `amount` is always non-negative; `kind` carries the sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: TxKind,
    pub amount: Money,
    pub status: TxStatus,
}

impl TransactionRecord {
    pub fn new<S: Into<String>>(
        id: S,
        timestamp: DateTime<Utc>,
        kind: TxKind,
        amount: Money,
        status: TxStatus,
    ) -> Self {
        debug_assert!(!amount.is_negative(), "TransactionRecord.amount must be >= 0");
        Self {
            id: id.into(),
            timestamp,
            kind,
            amount,
            status,
        }
    }

    pub fn credit<S: Into<String>>(id: S, timestamp: DateTime<Utc>, amount: Money) -> Self {
        Self::new(id, timestamp, TxKind::Credit, amount, TxStatus::Completed)
    }

    pub fn debit<S: Into<String>>(id: S, timestamp: DateTime<Utc>, amount: Money) -> Self {
        Self::new(id, timestamp, TxKind::Debit, amount, TxStatus::Completed)
    }

    /// Same record with status Pending.
    pub fn pending(mut self) -> Self {
        self.status = TxStatus::Pending;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TxStatus::Completed
    }

    /// Credit adds, Debit subtracts.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TxKind::Credit => self.amount,
            TxKind::Debit => -self.amount,
        }
    }
}

/// Current wallet state as reported by the wallet source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub current_balance: Money,
    pub currency_code: String,
}

impl WalletSnapshot {
    pub fn new<S: Into<String>>(current_balance: Money, currency_code: S) -> Self {
        Self {
            current_balance,
            currency_code: currency_code.into(),
        }
    }
}

/// Which slice of time a trajectory point closes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Period {
    /// Calendar month in the viewer's timezone.
    Month { year: i32, month: u32 },
    /// Synthetic point pinned to the wallet's current balance.
    Current,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub period: Period,
    /// Locale-rendered label for charting.
    pub label: String,
    pub balance: Money,
}

/// Non-completed records excluded from every total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingActivity {
    pub count: usize,
    pub credit_total: Money,
    pub debit_total: Money,
}

impl PendingActivity {
    pub(crate) fn record(&mut self, tx: &TransactionRecord) {
        self.count += 1;
        match tx.kind {
            TxKind::Credit => self.credit_total = self.credit_total.saturating_add(tx.amount),
            TxKind::Debit => self.debit_total = self.debit_total.saturating_add(tx.amount),
        }
    }
}

/// Derived portfolio view. Recomputed on every call, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub currency_code: String,
    /// Always equal to the wallet's current balance.
    pub available_balance: Money,
    /// Sum of Completed credits.
    pub invested_principal: Money,
    /// `invested_principal - completed debits - current balance`; may be negative.
    pub historical_profit: Money,
    /// Time-ordered; the last point is always the wallet's current balance.
    pub monthly_trajectory: Vec<TrajectoryPoint>,
    pub pending: PendingActivity,
}

impl PortfolioSummary {
    /// Balance of the final trajectory point.
    pub fn closing_balance(&self) -> Money {
        self.monthly_trajectory
            .last()
            .map(|p| p.balance)
            .unwrap_or(self.available_balance)
    }
}
