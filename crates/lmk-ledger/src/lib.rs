//! lmk-ledger
//!
//! Ledger reconstruction: wallet balance + transaction history -> portfolio summary.
//! - The wallet snapshot is ground truth for "now"; the log never overrides it
//! - Only Completed records count towards totals and the trajectory
//! - Chronological order is a stable sort on timestamp (input order breaks ties)
//! - Monthly trajectory is last-write-wins per month, capped to a trailing window
//! - Pure deterministic logic (no IO, no clock, no caching)

mod ordering;
mod reconstruct;
mod record;
mod trajectory;
mod types;

pub use ordering::{chronological, sort_chronological};
pub use reconstruct::{reconstruct, reconstruct_default};
pub use record::{RecordError, TransactionRow, WalletRow};
pub use trajectory::{
    build_trajectory, Locale, TrajectoryOptions, DEFAULT_TRAJECTORY_WINDOW, MIN_TRAJECTORY_WINDOW,
};
pub use types::{
    PendingActivity, Period, PortfolioSummary, TrajectoryPoint, TransactionRecord, TxKind,
    TxStatus, WalletSnapshot,
};
