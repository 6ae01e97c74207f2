//! lmk-config
//!
//! Layered YAML configuration for the engine surfaces.
//! - Layers merge in order; later layers override earlier ones key by key
//! - The merged document is hashed (SHA-256 over canonical JSON) so a run can
//!   report exactly which settings produced it
//! - Backend credentials pasted as values are rejected (`CONFIG_SECRET_DETECTED`)
//! - Leaves nothing reads are reported (`CONFIG_UNUSED_KEYS`)

mod consumption;
mod pointer;
mod secrets;
mod settings;

pub use consumption::{consumed_pointers, report_unused_keys, UnusedKeyPolicy, UnusedKeyReport};
pub use settings::EngineSettings;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use secrets::enforce_no_secret_literals;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

impl LoadedConfig {
    /// Empty document; every setting takes its default.
    pub fn empty() -> Result<Self> {
        load_layered_yaml_from_strings(&[])
    }
}

pub fn load_layered_yaml<P: AsRef<Path>>(paths: &[P]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::with_capacity(paths.len());
    for p in paths {
        let p = p.as_ref();
        let raw = fs::read_to_string(p)
            .with_context(|| format!("failed to read yaml path: {}", p.display()))?;
        docs.push(raw);
    }
    let doc_refs: Vec<&str> = docs.iter().map(String::as_str).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = Value::Object(Map::new());
    for (i, raw) in yaml_docs.iter().enumerate() {
        let layer: serde_yaml::Value =
            serde_yaml::from_str(raw).with_context(|| format!("invalid yaml in layer {i}"))?;
        // An empty file parses to null; treat it as an empty layer.
        if layer.is_null() {
            continue;
        }
        let layer = serde_json::to_value(layer)
            .with_context(|| format!("layer {i}: yaml->json conversion failed"))?;
        merge_layer(&mut merged, layer);
    }

    enforce_no_secret_literals(&merged)?;

    // `serde_json::Map` is key-sorted without `preserve_order`, so compact
    // output is canonical.
    let canonical_json =
        serde_json::to_string(&merged).context("canonical json serialize failed")?;
    let config_hash = hex::encode(Sha256::digest(canonical_json.as_bytes()));
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

/// Overlay `layer` onto `base` in place: maps merge per key, anything else replaces.
fn merge_layer(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Object(base_map), Value::Object(layer_map)) => {
            for (key, value) in layer_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_layer(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn layer_overrides_leaves_and_keeps_siblings() {
        let mut base = json!({"display": {"timezone": "UTC", "locale": "en-US"}});
        merge_layer(&mut base, json!({"display": {"timezone": "America/Sao_Paulo"}}));
        assert_eq!(
            base,
            json!({"display": {"timezone": "America/Sao_Paulo", "locale": "en-US"}})
        );
    }

    #[test]
    fn scalar_layer_replaces_whole_section() {
        let mut base = json!({"exit": {"admin_fee_percent": 2}});
        merge_layer(&mut base, json!({"exit": null}));
        assert_eq!(base, json!({"exit": null}));
    }

    #[test]
    fn empty_layers_hash_like_empty_object() {
        let a = load_layered_yaml_from_strings(&[""]).unwrap();
        let b = LoadedConfig::empty().unwrap();
        assert_eq!(a.config_hash, b.config_hash);
        assert_eq!(a.canonical_json, "{}");
    }
}
