//! File-backed sources: JSON wallet/transactions exports and CSV transaction exports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lmk_ledger::{TransactionRecord, TransactionRow, WalletRow, WalletSnapshot};
use tracing::debug;

use crate::source::{rows_to_records, SourceError, TransactionSource, WalletSource};

fn origin(path: &Path) -> String {
    path.display().to_string()
}

fn read_to_string(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound(origin(path)),
        _ => SourceError::Io {
            origin: origin(path),
            message: e.to_string(),
        },
    })
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Wallet and transaction history read from backend JSON exports.
///
/// Either path may be left unset; fetching from an unset path is
/// [`SourceError::NotFound`], not an empty result.
#[derive(Clone, Debug, Default)]
pub struct JsonFileSource {
    wallet_path: Option<PathBuf>,
    transactions_path: Option<PathBuf>,
}

impl JsonFileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wallet(mut self, path: impl Into<PathBuf>) -> Self {
        self.wallet_path = Some(path.into());
        self
    }

    pub fn with_transactions(mut self, path: impl Into<PathBuf>) -> Self {
        self.transactions_path = Some(path.into());
        self
    }
}

impl WalletSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json-file"
    }

    /// A file holding `null` means the account has no wallet.
    fn fetch_wallet(&self) -> Result<WalletSnapshot, SourceError> {
        let path = self
            .wallet_path
            .as_deref()
            .ok_or_else(|| SourceError::NotFound("wallet path not set".to_string()))?;
        let raw = read_to_string(path)?;
        let row: Option<WalletRow> =
            serde_json::from_str(&raw).map_err(|e| SourceError::Decode {
                origin: origin(path),
                message: e.to_string(),
            })?;
        let row = row.ok_or_else(|| SourceError::NotFound(format!("wallet in {}", origin(path))))?;
        let wallet = WalletSnapshot::try_from(row)?;
        debug!(path = %path.display(), currency = %wallet.currency_code, "wallet loaded");
        Ok(wallet)
    }
}

impl TransactionSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "json-file"
    }

    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>, SourceError> {
        let path = self
            .transactions_path
            .as_deref()
            .ok_or_else(|| SourceError::NotFound("transactions path not set".to_string()))?;
        let raw = read_to_string(path)?;
        let rows: Vec<TransactionRow> =
            serde_json::from_str(&raw).map_err(|e| SourceError::Decode {
                origin: origin(path),
                message: e.to_string(),
            })?;
        let records = rows_to_records(rows)?;
        debug!(path = %path.display(), count = records.len(), "transactions loaded");
        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Transaction history from a CSV export with header
/// `id,type,amount,status,created_at`.
#[derive(Clone, Debug)]
pub struct CsvTransactionSource {
    path: PathBuf,
}

impl CsvTransactionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionSource for CsvTransactionSource {
    fn name(&self) -> &'static str {
        "csv-file"
    }

    fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>, SourceError> {
        let file = fs::File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(origin(&self.path)),
            _ => SourceError::Io {
                origin: origin(&self.path),
                message: e.to_string(),
            },
        })?;

        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
        let mut rows = Vec::new();
        for (line, result) in rdr.deserialize::<TransactionRow>().enumerate() {
            let row = result.map_err(|e| SourceError::Decode {
                origin: format!("{}: row {}", origin(&self.path), line + 1),
                message: e.to_string(),
            })?;
            rows.push(row);
        }

        let records = rows_to_records(rows)?;
        debug!(path = %self.path.display(), count = records.len(), "csv transactions loaded");
        Ok(records)
    }
}

/// Pick the transaction adapter by file extension (`.csv` or JSON otherwise).
pub fn transaction_source_for_path(path: impl Into<PathBuf>) -> Box<dyn TransactionSource> {
    let path = path.into();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        Box::new(CsvTransactionSource::new(path))
    } else {
        Box::new(JsonFileSource::new().with_transactions(path))
    }
}
