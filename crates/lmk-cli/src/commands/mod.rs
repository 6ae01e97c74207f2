//! Command handler modules for the `lmk` binary.
//!
//! Shared utilities used by multiple command paths live here.
//! Command-specific logic lives in the submodules.

pub mod invest;
pub mod summary;

use anyhow::{Context, Result};
use lmk_config::{load_layered_yaml, report_unused_keys, EngineSettings, UnusedKeyPolicy};
use serde::Serialize;
use tracing::warn;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Settings in force for one invocation, plus the hash of the config that produced them.
pub struct ResolvedSettings {
    pub settings: EngineSettings,
    pub config_hash: Option<String>,
}

/// Load layered config (if any) and extract typed settings.
///
/// Unused keys are logged, or rejected when `strict` is set.
pub fn resolve_settings(paths: &[String], strict: bool) -> Result<ResolvedSettings> {
    if paths.is_empty() {
        return Ok(ResolvedSettings {
            settings: EngineSettings::default(),
            config_hash: None,
        });
    }

    let loaded = load_layered_yaml(paths)?;
    let policy = if strict {
        UnusedKeyPolicy::Fail
    } else {
        UnusedKeyPolicy::Warn
    };
    let report = report_unused_keys(&loaded.config_json, policy)?;
    if !report.is_clean() {
        warn!(
            unused = ?report.unused_leaf_pointers,
            "config carries keys no command reads"
        );
    }

    let settings = EngineSettings::from_config_json(&loaded.config_json)
        .context("invalid engine settings in config")?;
    Ok(ResolvedSettings {
        settings,
        config_hash: Some(loaded.config_hash),
    })
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output json failed")?;
    println!("{s}");
    Ok(())
}
