//! Early exit of a position on the secondary market.
//!
//! The platform keeps an administrative fee on what is still receivable:
//! ```text
//! admin_fee  = round_half_up(receivable × fee_rate)
//! net_payout = receivable − admin_fee
//! ```
//! A position with nothing receivable (`<= 0`) quotes zero for both.
//!
//! The fee is a platform-wide policy. [`quote_exit`] uses the standing 2%;
//! [`ExitPolicy`] carries a different rate when one is configured, without
//! changing the call shape.

use lmk_money::{Money, Rate};
use serde::{Deserialize, Serialize};

/// Standing administrative fee for early exits.
pub const EXIT_ADMIN_FEE: Rate = Rate::from_percent(2);

/// An investor's stake in one opportunity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub invested_amount: Money,
    /// Already paid out to the investor.
    pub received_amount: Money,
    /// Still owed to the investor.
    pub receivable_amount: Money,
}

impl Position {
    pub fn new(invested_amount: Money, received_amount: Money, receivable_amount: Money) -> Self {
        Self {
            invested_amount,
            received_amount,
            receivable_amount,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitQuote {
    pub fee_rate: Rate,
    pub admin_fee_amount: Money,
    /// Never negative.
    pub net_payout: Money,
    /// `received + net_payout - invested`: the all-in result of exiting now.
    pub total_return: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitPolicyError {
    NegativeFee { rate: Rate },
    FeeAboveOneHundredPercent { rate: Rate },
}

impl std::fmt::Display for ExitPolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeFee { rate } => {
                write!(f, "exit policy: admin fee must be >= 0, got {rate}")
            }
            Self::FeeAboveOneHundredPercent { rate } => {
                write!(f, "exit policy: admin fee must be <= 100%, got {rate}")
            }
        }
    }
}

impl std::error::Error for ExitPolicyError {}

/// Platform exit-fee policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExitPolicy {
    admin_fee: Rate,
}

impl Default for ExitPolicy {
    fn default() -> Self {
        Self {
            admin_fee: EXIT_ADMIN_FEE,
        }
    }
}

impl ExitPolicy {
    /// Fee must lie in `[0%, 100%]` so the net payout can never go negative.
    pub fn new(admin_fee: Rate) -> Result<Self, ExitPolicyError> {
        if admin_fee.is_negative() {
            return Err(ExitPolicyError::NegativeFee { rate: admin_fee });
        }
        if admin_fee > Rate::ONE_HUNDRED_PERCENT {
            return Err(ExitPolicyError::FeeAboveOneHundredPercent { rate: admin_fee });
        }
        Ok(Self { admin_fee })
    }

    pub fn admin_fee(&self) -> Rate {
        self.admin_fee
    }

    pub fn quote(&self, position: &Position) -> ExitQuote {
        let receivable = position.receivable_amount;
        let (admin_fee_amount, net_payout) = if receivable.is_positive() {
            let fee = receivable.apply_rate(self.admin_fee);
            (fee, receivable - fee)
        } else {
            (Money::ZERO, Money::ZERO)
        };

        ExitQuote {
            fee_rate: self.admin_fee,
            admin_fee_amount,
            net_payout,
            total_return: position
                .received_amount
                .saturating_add(net_payout)
                .saturating_sub(position.invested_amount),
        }
    }
}

/// Quote an early exit under the standing 2% fee.
pub fn quote_exit(position: &Position) -> ExitQuote {
    ExitPolicy::default().quote(position)
}
