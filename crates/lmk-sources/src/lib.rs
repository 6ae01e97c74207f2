//! lmk-sources
//!
//! Retrieval of wallet and transaction data for the ledger.
//! - Traits are the seam; adapters are JSON files, CSV exports, and in-memory fixtures
//! - Failure to fetch is always an explicit `SourceError`, never an empty portfolio
//! - Row validation happens here, before anything reaches the reconstructor

mod file;
mod memory;
mod source;

pub use file::{transaction_source_for_path, CsvTransactionSource, JsonFileSource};
pub use memory::InMemorySource;
pub use source::{rows_to_records, SourceError, TransactionSource, WalletSource};

use lmk_ledger::{reconstruct, PortfolioSummary, TrajectoryOptions};
use tracing::info;

/// Fetch both inputs and reconstruct the portfolio.
///
/// Any fetch failure aborts before reconstruction.
pub fn fetch_and_reconstruct(
    wallet_source: &dyn WalletSource,
    transaction_source: &dyn TransactionSource,
    opts: &TrajectoryOptions,
) -> Result<PortfolioSummary, SourceError> {
    let wallet = wallet_source.fetch_wallet()?;
    let transactions = transaction_source.fetch_transactions()?;
    info!(
        wallet_source = wallet_source.name(),
        transaction_source = transaction_source.name(),
        transactions = transactions.len(),
        "reconstructing portfolio"
    );
    Ok(reconstruct(&wallet, &transactions, opts))
}
