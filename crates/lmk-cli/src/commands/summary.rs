//! `lmk summary`: wallet + transactions -> portfolio summary.

use anyhow::{Context, Result};
use lmk_sources::{fetch_and_reconstruct, transaction_source_for_path, JsonFileSource};

use super::{print_json, resolve_settings};

pub fn run(
    wallet: &str,
    transactions: &str,
    config_paths: &[String],
    strict_config: bool,
    json: bool,
) -> Result<()> {
    let resolved = resolve_settings(config_paths, strict_config)?;
    let opts = resolved.settings.trajectory_options();

    let wallet_src = JsonFileSource::new().with_wallet(wallet);
    let tx_src = transaction_source_for_path(transactions);
    let summary = fetch_and_reconstruct(&wallet_src, tx_src.as_ref(), &opts)
        .with_context(|| format!("summary failed (wallet={wallet}, transactions={transactions})"))?;

    if json {
        return print_json(&summary);
    }

    if let Some(hash) = &resolved.config_hash {
        println!("config_hash={hash}");
    }
    println!("currency={}", summary.currency_code);
    println!("available_balance={}", summary.available_balance);
    println!("invested_principal={}", summary.invested_principal);
    println!("historical_profit={}", summary.historical_profit);
    println!("pending_count={}", summary.pending.count);
    println!("pending_credit_total={}", summary.pending.credit_total);
    println!("pending_debit_total={}", summary.pending.debit_total);
    println!("trajectory_points={}", summary.monthly_trajectory.len());
    for (i, point) in summary.monthly_trajectory.iter().enumerate() {
        println!("trajectory_{i}_label={}", point.label);
        println!("trajectory_{i}_balance={}", point.balance);
    }
    Ok(())
}
