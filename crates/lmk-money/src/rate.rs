use serde::{Deserialize, Serialize};

use crate::{decimal::parse_scaled, MoneyError, BPS_SCALE};

/// A percentage in integer basis points (`1% == Rate::from_bps(100)`).
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rate(i64);

impl Rate {
    pub const ZERO: Rate = Rate(0);
    pub const ONE_HUNDRED_PERCENT: Rate = Rate(BPS_SCALE);

    #[inline]
    pub const fn from_bps(bps: i64) -> Self {
        Rate(bps)
    }

    /// Whole-percent constructor: `from_percent(12)` is 12%.
    #[inline]
    pub const fn from_percent(percent: i64) -> Self {
        Rate(percent * 100)
    }

    #[inline]
    pub const fn bps(self) -> i64 {
        self.0
    }

    /// Parse a percent string with up to two decimals (`"12"`, `"12.5"`).
    pub fn parse_percent(s: &str) -> Result<Rate, MoneyError> {
        parse_scaled(s, 2, "rate").map(Rate)
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for Rate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / 100;
        let frac = (self.0 % 100).abs();
        if self.0 < 0 && whole == 0 {
            write!(f, "-{whole}.{frac:02}%")
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}
