//! Deterministic decimal-string normalization.
//!
//! Converts user or export input such as `"500.00"` or `"12.5"` into a
//! scaled integer without going through floating point. Inputs that would
//! need rounding (more fractional digits than the target scale) are rejected
//! instead of silently rounded.

use std::fmt;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced while normalizing a decimal string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The input string was empty (after trimming).
    Empty { field: &'static str },
    /// The input could not be parsed as a plain decimal number.
    Invalid { field: &'static str, raw: String },
    /// The input carries more fractional digits than the target scale.
    TooManyDecimalPlaces {
        field: &'static str,
        raw: String,
        max: u32,
    },
    /// The scaled value does not fit in an `i64`.
    OutOfRange { field: &'static str, raw: String },
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::Empty { field } => write!(f, "field '{field}' is empty"),
            MoneyError::Invalid { field, raw } => {
                write!(f, "field '{field}' could not be parsed: '{raw}'")
            }
            MoneyError::TooManyDecimalPlaces { field, raw, max } => write!(
                f,
                "field '{field}' has more than {max} decimal places \
                 (ambiguous minor-unit conversion): '{raw}'"
            ),
            MoneyError::OutOfRange { field, raw } => {
                write!(f, "field '{field}' is out of range: '{raw}'")
            }
        }
    }
}

impl std::error::Error for MoneyError {}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Parse a decimal string into an integer scaled by `10^places`.
///
/// Rules:
/// - Accepts an optional leading `+` or `-`.
/// - Accepts an optional fractional part separated by `.`.
/// - Rejects more than `places` fractional digits (would require rounding).
/// - Rejects empty strings, non-digit characters, and multiple `.` separators.
///
/// `parse_scaled("500.5", 2, "amount") == Ok(50_050)`.
pub fn parse_scaled(s: &str, places: u32, field: &'static str) -> Result<i64, MoneyError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MoneyError::Empty { field });
    }
    let invalid = || MoneyError::Invalid {
        field,
        raw: s.to_string(),
    };

    let (negative, digits) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, f),
        None => (digits, ""),
    };

    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }

    if frac_part.len() > places as usize {
        return Err(MoneyError::TooManyDecimalPlaces {
            field,
            raw: s.to_string(),
            max: places,
        });
    }

    let out_of_range = || MoneyError::OutOfRange {
        field,
        raw: s.to_string(),
    };

    let int_val: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse::<i64>().map_err(|_| out_of_range())?
    };

    let mut frac_padded = frac_part.to_string();
    while frac_padded.len() < places as usize {
        frac_padded.push('0');
    }
    let frac_val: i64 = if frac_padded.is_empty() {
        0
    } else {
        frac_padded.parse::<i64>().map_err(|_| invalid())?
    };

    let scaled = 10_i64
        .checked_pow(places)
        .and_then(|scale| int_val.checked_mul(scale))
        .and_then(|v| v.checked_add(frac_val))
        .ok_or_else(out_of_range)?;

    Ok(if negative { -scaled } else { scaled })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
