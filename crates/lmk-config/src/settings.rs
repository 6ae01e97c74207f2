//! Typed engine settings extracted from the merged config document.
//!
//! Absent keys take their defaults. Present-but-wrong keys are errors: a
//! misspelt timezone must not quietly render months in UTC.

use anyhow::{anyhow, bail, Context, Result};
use chrono_tz::Tz;
use lmk_invest::{ExitPolicy, EXIT_ADMIN_FEE};
use lmk_ledger::{Locale, TrajectoryOptions, DEFAULT_TRAJECTORY_WINDOW, MIN_TRAJECTORY_WINDOW};
use lmk_money::Rate;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub timezone: Tz,
    pub locale: Locale,
    pub trajectory_window: usize,
    pub exit_admin_fee: Rate,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            locale: Locale::default(),
            trajectory_window: DEFAULT_TRAJECTORY_WINDOW,
            exit_admin_fee: EXIT_ADMIN_FEE,
        }
    }
}

impl EngineSettings {
    pub fn from_config_json(config: &Value) -> Result<Self> {
        let mut s = Self::default();

        if let Some(v) = config.pointer("/display/timezone") {
            let name = v
                .as_str()
                .ok_or_else(|| anyhow!("/display/timezone must be a string"))?;
            s.timezone = name
                .trim()
                .parse::<Tz>()
                .map_err(|e| anyhow!("/display/timezone: unknown timezone '{name}': {e}"))?;
        }

        if let Some(v) = config.pointer("/display/locale") {
            let raw = v
                .as_str()
                .ok_or_else(|| anyhow!("/display/locale must be a string"))?;
            s.locale = raw
                .parse::<Locale>()
                .map_err(|e| anyhow!("/display/locale: {e}"))?;
        }

        if let Some(v) = config.pointer("/ledger/trajectory_window") {
            let n = v
                .as_u64()
                .ok_or_else(|| anyhow!("/ledger/trajectory_window must be a positive integer"))?;
            if n < MIN_TRAJECTORY_WINDOW as u64 {
                bail!("/ledger/trajectory_window must be >= {MIN_TRAJECTORY_WINDOW}, got {n}");
            }
            s.trajectory_window = usize::try_from(n)
                .context("/ledger/trajectory_window does not fit in usize")?;
        }

        if let Some(v) = config.pointer("/exit/admin_fee_percent") {
            // Numbers go through their decimal text; never through f64 math.
            let text = match v {
                Value::Number(n) => n.to_string(),
                Value::String(s) => s.clone(),
                _ => bail!("/exit/admin_fee_percent must be a number or decimal string"),
            };
            let rate = Rate::parse_percent(&text)
                .with_context(|| format!("/exit/admin_fee_percent: invalid value '{text}'"))?;
            ExitPolicy::new(rate).context("/exit/admin_fee_percent")?;
            s.exit_admin_fee = rate;
        }

        Ok(s)
    }

    pub fn trajectory_options(&self) -> TrajectoryOptions {
        TrajectoryOptions {
            timezone: self.timezone,
            locale: self.locale,
            window: self.trajectory_window,
        }
    }

    pub fn exit_policy(&self) -> Result<ExitPolicy> {
        ExitPolicy::new(self.exit_admin_fee).context("exit policy from settings")
    }
}
