//! lmk-money
//!
//! Integer money for the marketplace engine.
//! - `Money` is a signed count of minor currency units (cents)
//! - `Rate` is a percentage held in integer basis points
//! - decimal strings are normalized without floating point
//! - applying a rate to money rounds half-up at minor-unit precision
//!
//! Division by 100 happens only when a value is formatted for display.

mod decimal;
mod money;
mod rate;

pub use decimal::{parse_scaled, MoneyError};
pub use money::Money;
pub use rate::Rate;

/// Minor units per major unit (cents per real/dollar).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Basis points per whole rate (100% = 10_000 bps).
pub const BPS_SCALE: i64 = 10_000;

/// Integer division of `n` by a positive `d`, rounding half away from zero.
///
/// `d` must be > 0.
pub(crate) fn div_round_half_up(n: i128, d: i128) -> i128 {
    debug_assert!(d > 0);
    let q = n / d;
    let r = n % d;
    if r.abs() * 2 >= d {
        q + n.signum()
    } else {
        q
    }
}

pub(crate) fn i128_to_i64_clamp(x: i128) -> i64 {
    if x > i64::MAX as i128 {
        i64::MAX
    } else if x < i64::MIN as i128 {
        i64::MIN
    } else {
        x as i64
    }
}
