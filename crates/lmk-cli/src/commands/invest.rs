//! `lmk project` and `lmk exit-quote`.
//!
//! Decimal inputs are normalized to minor units / basis points before they
//! reach the engine; nothing here does arithmetic on them.

use anyhow::{Context, Result};
use lmk_invest::{
    max_affordable_quotas, project as project_quotas, InvestmentProjection, OpportunityTerms,
    Position,
};
use lmk_money::{Money, Rate};
use lmk_sources::{JsonFileSource, WalletSource};
use serde::Serialize;

use super::{print_json, resolve_settings};

/// `--json` body: the projection plus the balance context printed in plain mode.
#[derive(Serialize)]
struct ProjectOutput {
    #[serde(flatten)]
    projection: InvestmentProjection,
    available_balance: Money,
    max_affordable_quotas: u32,
}

pub struct ProjectArgs<'a> {
    pub quota_price: &'a str,
    pub rate: &'a str,
    pub term_months: u32,
    pub quotas: u32,
    pub balance: Option<&'a str>,
    pub wallet: Option<&'a str>,
}

fn available_balance(balance: Option<&str>, wallet: Option<&str>) -> Result<Money> {
    match (balance, wallet) {
        (Some(b), _) => Money::parse_field(b, "balance").context("invalid --balance"),
        (None, Some(path)) => {
            let w = JsonFileSource::new()
                .with_wallet(path)
                .fetch_wallet()
                .with_context(|| format!("wallet fetch failed: {path}"))?;
            Ok(w.current_balance)
        }
        (None, None) => anyhow::bail!("one of --balance or --wallet is required"),
    }
}

/// Execute `lmk project`.
pub fn project(args: ProjectArgs<'_>, json: bool) -> Result<()> {
    let quota_price =
        Money::parse_field(args.quota_price, "quota_price").context("invalid --quota-price")?;
    let rate = Rate::parse_percent(args.rate).context("invalid --rate")?;
    let terms = OpportunityTerms::new(quota_price, rate, args.term_months);
    let balance = available_balance(args.balance, args.wallet)?;

    let projection = project_quotas(&terms, args.quotas, balance).context("projection rejected")?;
    let max_quotas = max_affordable_quotas(&terms, balance).context("projection rejected")?;

    if json {
        return print_json(&ProjectOutput {
            projection,
            available_balance: balance,
            max_affordable_quotas: max_quotas,
        });
    }

    println!("quotas={}", projection.quotas);
    println!("term_months={}", projection.term_months);
    println!("investment_amount={}", projection.investment_amount);
    println!("projected_payout={}", projection.projected_payout);
    println!("expected_profit={}", projection.expected_profit);
    println!("available_balance={balance}");
    println!("is_affordable={}", projection.is_affordable);
    println!("max_affordable_quotas={max_quotas}");
    Ok(())
}

/// Execute `lmk exit-quote`.
pub fn exit_quote(
    invested: &str,
    received: &str,
    receivable: &str,
    config_paths: &[String],
    strict_config: bool,
    json: bool,
) -> Result<()> {
    let resolved = resolve_settings(config_paths, strict_config)?;
    let policy = resolved.settings.exit_policy()?;

    let position = Position::new(
        Money::parse_field(invested, "invested").context("invalid --invested")?,
        Money::parse_field(received, "received").context("invalid --received")?,
        Money::parse_field(receivable, "receivable").context("invalid --receivable")?,
    );
    let quote = policy.quote(&position);

    if json {
        return print_json(&quote);
    }

    if let Some(hash) = &resolved.config_hash {
        println!("config_hash={hash}");
    }
    println!("fee_rate={}", quote.fee_rate);
    println!("admin_fee_amount={}", quote.admin_fee_amount);
    println!("net_payout={}", quote.net_payout);
    println!("total_return={}", quote.total_return);
    Ok(())
}
