//! Integer money type.
//!
//! All monetary values in the engine are a count of minor currency units
//! stored as `i64`. Wrapping the raw integer stops accidental arithmetic with
//! unrelated integers (quota counts, month numbers, ids) and keeps the
//! "divide by 100" step out of the engine entirely.
//!
//! # Arithmetic
//!
//! - `Add`, `Sub`, `Neg`, `AddAssign`, `SubAssign` are closed over `Money`
//!   and follow Rust's integer semantics (panic on overflow in debug).
//! - `saturating_add` / `saturating_sub` clamp at the `i64` extremes and are
//!   what the ledger uses for sums.
//! - `checked_mul_count` multiplies a unit price by a plain count.
//! - `apply_rate` takes a percentage of an amount, rounding half-up.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{decimal::parse_scaled, div_round_half_up, i128_to_i64_clamp, MoneyError, Rate};
use crate::{BPS_SCALE, MINOR_UNITS_PER_MAJOR};

/// A signed amount of minor currency units (e.g. cents).
///
/// There is no `From<i64>`; use [`Money::from_minor`] where a raw integer is
/// known to be a minor-unit amount. Serializes as the bare integer.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(i64::MAX);
    pub const MIN: Money = Money(i64::MIN);

    /// Construct from a raw minor-unit count.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// The raw minor-unit count.
    #[inline]
    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Parse a major-unit decimal string (`"500.00"`, `"12.5"`, `"-3"`).
    ///
    /// At most two fractional digits are accepted; no floating point is used.
    pub fn parse(s: &str) -> Result<Money, MoneyError> {
        parse_scaled(s, 2, "amount").map(Money)
    }

    /// Like [`Money::parse`] but reports `field` in errors.
    pub fn parse_field(s: &str, field: &'static str) -> Result<Money, MoneyError> {
        parse_scaled(s, 2, field).map(Money)
    }

    #[inline]
    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }

    #[inline]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiply a per-unit price by a plain count.
    ///
    /// Returns `None` on overflow; callers decide whether that is an error.
    #[inline]
    pub fn checked_mul_count(self, count: i64) -> Option<Money> {
        self.0.checked_mul(count).map(Money)
    }

    /// `self × rate`, rounded half away from zero to a whole minor unit.
    ///
    /// Widened to `i128` internally; the result clamps at the `i64` extremes.
    pub fn apply_rate(self, rate: Rate) -> Money {
        let product = self.0 as i128 * rate.bps() as i128;
        Money(i128_to_i64_clamp(div_round_half_up(
            product,
            BPS_SCALE as i128,
        )))
    }

    /// Major-unit decimal string with exactly two fractional digits.
    pub fn to_major_string(self) -> String {
        let major = self.0 / MINOR_UNITS_PER_MAJOR;
        let frac = (self.0 % MINOR_UNITS_PER_MAJOR).abs();
        // Truncation drops the sign for -0.xx, so emit it explicitly.
        if self.0 < 0 && major == 0 {
            format!("-{major}.{frac:02}")
        } else {
            format!("{major}.{frac:02}")
        }
    }
}

impl Add for Money {
    type Output = Money;
    #[inline]
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    #[inline]
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    #[inline]
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

/// Saturating sum.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_major_string())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
