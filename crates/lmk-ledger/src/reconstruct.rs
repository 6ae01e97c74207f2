//! Portfolio summary reconstruction.
//!
//! `reconstruct` is the single consumption point for dashboard and wallet
//! views: every derived money figure comes from here, recomputed from the
//! full inputs on each call.
//!
//! # Determinism
//! No IO, no clock, no hashing of unordered containers. Identical inputs
//! produce identical summaries (including trajectory labels).

use lmk_money::Money;
use tracing::debug;

use crate::{
    ordering::sort_chronological, trajectory::build_trajectory, PendingActivity,
    PortfolioSummary, TrajectoryOptions, TransactionRecord, TxKind, WalletSnapshot,
};

/// Fold the transaction log onto the wallet snapshot.
///
/// - `available_balance` is the wallet balance verbatim.
/// - `invested_principal` sums Completed credits.
/// - `historical_profit = invested_principal - completed debits - balance`.
///   This is inflow minus outflow minus what remains, kept exactly as the
///   product defines it; it is not clamped and may be negative.
/// - Pending records only feed `pending`.
///
/// Never fails: an empty log yields a summary with a one-point trajectory.
pub fn reconstruct(
    wallet: &WalletSnapshot,
    transactions: &[TransactionRecord],
    opts: &TrajectoryOptions,
) -> PortfolioSummary {
    let mut completed: Vec<&TransactionRecord> = Vec::with_capacity(transactions.len());
    let mut pending = PendingActivity::default();
    for tx in transactions {
        if tx.is_completed() {
            completed.push(tx);
        } else {
            pending.record(tx);
        }
    }

    let mut credits = Money::ZERO;
    let mut debits = Money::ZERO;
    for tx in &completed {
        match tx.kind {
            TxKind::Credit => credits = credits.saturating_add(tx.amount),
            TxKind::Debit => debits = debits.saturating_add(tx.amount),
        }
    }

    let balance = wallet.current_balance;
    let historical_profit = credits.saturating_sub(debits).saturating_sub(balance);

    sort_chronological(&mut completed);
    let monthly_trajectory = build_trajectory(&completed, balance, opts);

    debug!(
        completed = completed.len(),
        pending = pending.count,
        invested_principal = credits.minor(),
        completed_debits = debits.minor(),
        historical_profit = historical_profit.minor(),
        points = monthly_trajectory.len(),
        "ledger reconstructed"
    );

    PortfolioSummary {
        currency_code: wallet.currency_code.clone(),
        available_balance: balance,
        invested_principal: credits,
        historical_profit,
        monthly_trajectory,
        pending,
    }
}

/// [`reconstruct`] with UTC months, en-US labels and the default window.
pub fn reconstruct_default(
    wallet: &WalletSnapshot,
    transactions: &[TransactionRecord],
) -> PortfolioSummary {
    reconstruct(wallet, transactions, &TrajectoryOptions::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
