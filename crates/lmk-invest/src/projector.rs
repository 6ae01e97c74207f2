//! Investment projection for a quota purchase.
//!
//! # Formula
//! ```text
//! investment = quotas × quota_price
//! payout     = investment + round_half_up(investment × gross_return_rate)
//! profit     = payout − investment
//! affordable = investment ≤ available_balance
//! ```
//! The rate is the total rate for the whole term, applied once. It is not
//! annualized and not compounded per month.
//!
//! Input outside the documented domain is a caller bug and is rejected with
//! [`ProjectionError`]; insufficient balance is not an error, it is
//! `is_affordable == false`.

use lmk_money::{Money, Rate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Pricing terms of an investment opportunity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpportunityTerms {
    /// Price of one quota.
    pub quota_price: Money,
    /// Gross return for the full term.
    pub gross_return_rate: Rate,
    pub term_months: u32,
}

impl OpportunityTerms {
    pub fn new(quota_price: Money, gross_return_rate: Rate, term_months: u32) -> Self {
        Self {
            quota_price,
            gross_return_rate,
            term_months,
        }
    }

    /// Check the terms themselves, independent of any quota count.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !self.quota_price.is_positive() {
            return Err(ProjectionError::NonPositiveQuotaPrice {
                quota_price: self.quota_price,
            });
        }
        if self.gross_return_rate.is_negative() {
            return Err(ProjectionError::NegativeRate {
                rate: self.gross_return_rate,
            });
        }
        if self.term_months == 0 {
            return Err(ProjectionError::ZeroTerm);
        }
        Ok(())
    }
}

/// Outcome of buying `quotas` under some [`OpportunityTerms`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub quotas: u32,
    pub term_months: u32,
    pub investment_amount: Money,
    pub projected_payout: Money,
    pub expected_profit: Money,
    pub is_affordable: bool,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// At least one quota must be requested.
    ZeroQuotas,
    /// A quota must cost something.
    NonPositiveQuotaPrice { quota_price: Money },
    /// Gross return rate must be >= 0.
    NegativeRate { rate: Rate },
    /// Term must be at least one month.
    ZeroTerm,
    /// `quotas × quota_price` (or the payout) does not fit in an i64.
    Overflow { quotas: u32 },
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroQuotas => write!(f, "projection input: quotas must be >= 1"),
            Self::NonPositiveQuotaPrice { quota_price } => write!(
                f,
                "projection input: quota_price must be > 0, got {quota_price}"
            ),
            Self::NegativeRate { rate } => write!(
                f,
                "projection input: gross_return_rate must be >= 0, got {rate}"
            ),
            Self::ZeroTerm => write!(f, "projection input: term_months must be >= 1"),
            Self::Overflow { quotas } => {
                write!(f, "projection input: {quotas} quotas overflow the amount range")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Project cost, payout and profit of buying `quotas`.
///
/// # Errors
/// [`ProjectionError`] when `quotas == 0`, the terms are invalid, or the
/// amounts overflow. Never errors on insufficient balance.
pub fn project(
    terms: &OpportunityTerms,
    quotas: u32,
    available_balance: Money,
) -> Result<InvestmentProjection, ProjectionError> {
    terms.validate()?;
    if quotas == 0 {
        return Err(ProjectionError::ZeroQuotas);
    }

    let investment_amount = terms
        .quota_price
        .checked_mul_count(i64::from(quotas))
        .ok_or(ProjectionError::Overflow { quotas })?;
    let gain = investment_amount.apply_rate(terms.gross_return_rate);
    let projected_payout = investment_amount
        .checked_add(gain)
        .ok_or(ProjectionError::Overflow { quotas })?;

    Ok(InvestmentProjection {
        quotas,
        term_months: terms.term_months,
        investment_amount,
        projected_payout,
        expected_profit: projected_payout - investment_amount,
        is_affordable: investment_amount <= available_balance,
    })
}

/// Largest quota count whose cost fits in `available_balance` (0 if none).
///
/// Saturates at `u32::MAX` for absurdly large balances.
pub fn max_affordable_quotas(
    terms: &OpportunityTerms,
    available_balance: Money,
) -> Result<u32, ProjectionError> {
    terms.validate()?;
    if !available_balance.is_positive() {
        return Ok(0);
    }
    let n = available_balance.minor() / terms.quota_price.minor();
    Ok(u32::try_from(n).unwrap_or(u32::MAX))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
