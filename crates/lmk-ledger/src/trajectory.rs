//! Monthly balance trajectory.
//!
//! Walks chronologically sorted, Completed records with a running signed
//! balance and keeps the balance after the last record of each calendar
//! month (viewer timezone). A synthetic "current" point carrying the wallet
//! balance always closes the series, because the log may not contain every
//! movement the wallet has seen (e.g. returns booked elsewhere).
//!
//! Months are keyed by (year, month), not by rendered label, so January of
//! two different years never collapses into one point.

use std::str::FromStr;

use chrono::Datelike;
use chrono_tz::Tz;
use lmk_money::Money;

use crate::{Period, TrajectoryPoint, TransactionRecord};

/// Trailing window that bounds chart width (synthetic point included).
pub const DEFAULT_TRAJECTORY_WINDOW: usize = 6;

/// Smallest usable window: one closed month plus the current point, so any
/// completed activity still draws a slope.
pub const MIN_TRAJECTORY_WINDOW: usize = 2;

/// Label language for trajectory points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    EnUs,
    PtBr,
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
        }
    }

    /// `month` is 1-based.
    pub fn month_label(&self, year: i32, month: u32) -> String {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::EnUs => format!("{} {year}", MONTHS_EN[idx]),
            Locale::PtBr => format!("{}/{year}", MONTHS_PT[idx]),
        }
    }

    pub fn current_label(&self) -> &'static str {
        match self {
            Locale::EnUs => "current",
            Locale::PtBr => "atual",
        }
    }

    pub fn label_for(&self, period: Period) -> String {
        match period {
            Period::Month { year, month } => self.month_label(year, month),
            Period::Current => self.current_label().to_string(),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            other => Err(format!(
                "invalid locale '{other}'. expected one of: en-US | pt-BR"
            )),
        }
    }
}

/// Viewer-dependent knobs for trajectory construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrajectoryOptions {
    /// Timezone used to decide which calendar month a record falls in.
    pub timezone: Tz,
    pub locale: Locale,
    /// Maximum number of points returned; values below 2 act as 2.
    pub window: usize,
}

impl Default for TrajectoryOptions {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            locale: Locale::EnUs,
            window: DEFAULT_TRAJECTORY_WINDOW,
        }
    }
}

/// Build the trajectory from records already sorted chronologically.
///
/// Callers pass Completed records only. The result is never empty and its
/// last point is always `Period::Current` at `current_balance`.
pub fn build_trajectory(
    sorted: &[&TransactionRecord],
    current_balance: Money,
    opts: &TrajectoryOptions,
) -> Vec<TrajectoryPoint> {
    let mut months: Vec<(Period, Money)> = Vec::new();
    let mut running = Money::ZERO;

    for tx in sorted {
        running = running.saturating_add(tx.signed_amount());
        let local = tx.timestamp.with_timezone(&opts.timezone);
        let period = Period::Month {
            year: local.year(),
            month: local.month(),
        };
        // Sorted input means a month's records are contiguous: overwrite the
        // open month, otherwise start a new one.
        match months.last_mut() {
            Some((open, balance)) if *open == period => *balance = running,
            _ => months.push((period, running)),
        }
    }
    months.push((Period::Current, current_balance));

    let window = opts.window.max(MIN_TRAJECTORY_WINDOW);
    let skip = months.len().saturating_sub(window);

    months
        .into_iter()
        .skip(skip)
        .map(|(period, balance)| TrajectoryPoint {
            period,
            label: opts.locale.label_for(period),
            balance,
        })
        .collect()
}
