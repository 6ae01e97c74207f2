use lmk_ledger::{TransactionRecord, WalletSnapshot};

use crate::source::{SourceError, TransactionSource, WalletSource};

/// Fixed in-process data. A `None` wallet reports [`SourceError::NotFound`].
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    wallet: Option<WalletSnapshot>,
    transactions: Vec<TransactionRecord>,
}

impl InMemorySource {
    pub fn new(wallet: Option<WalletSnapshot>, transactions: Vec<TransactionRecord>) -> Self {
        Self {
            wallet,
            transactions,
        }
    }
}

impl WalletSource for InMemorySource {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn fetch_wallet(&self) -> Result<WalletSnapshot, SourceError> {
        self.wallet
            .clone()
            .ok_or_else(|| SourceError::NotFound("wallet".to_string()))
    }
}

impl TransactionSource for InMemorySource {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>, SourceError> {
        Ok(self.transactions.clone())
    }
}
