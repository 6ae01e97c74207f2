//! Scenario: config hash stability
//!
//! # Invariants under test
//!
//! 1. Loading the same layers twice yields the same hash and canonical JSON.
//! 2. Key order inside a YAML document does not affect the hash.
//! 3. Changing any value changes the hash.
//! 4. Overlays override base values key by key and are reflected in the hash.
//!
//! All tests are pure; no IO.

use lmk_config::load_layered_yaml_from_strings;

const BASE_YAML: &str = r#"
display:
  timezone: "UTC"
  locale: "en-US"
ledger:
  trajectory_window: 6
exit:
  admin_fee_percent: 2
"#;

const BASE_YAML_REORDERED: &str = r#"
exit:
  admin_fee_percent: 2
ledger:
  trajectory_window: 6
display:
  locale: "en-US"
  timezone: "UTC"
"#;

const BR_OVERLAY: &str = r#"
display:
  timezone: "America/Sao_Paulo"
  locale: "pt-BR"
"#;

#[test]
fn same_input_produces_identical_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    assert_eq!(a.config_hash, b.config_hash);
    assert_eq!(a.canonical_json, b.canonical_json);
    assert_eq!(a.config_hash.len(), 64, "sha256 hex");
}

#[test]
fn key_order_does_not_change_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let b = load_layered_yaml_from_strings(&[BASE_YAML_REORDERED]).unwrap();
    assert_eq!(a.config_hash, b.config_hash);
}

#[test]
fn different_value_changes_hash() {
    let a = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    let changed = BASE_YAML.replace("trajectory_window: 6", "trajectory_window: 7");
    let b = load_layered_yaml_from_strings(&[changed.as_str()]).unwrap();
    assert_ne!(a.config_hash, b.config_hash);
}

#[test]
fn overlay_overrides_and_keeps_siblings() {
    let merged = load_layered_yaml_from_strings(&[BASE_YAML, BR_OVERLAY]).unwrap();
    let j = &merged.config_json;
    assert_eq!(j.pointer("/display/timezone").unwrap(), "America/Sao_Paulo");
    assert_eq!(j.pointer("/display/locale").unwrap(), "pt-BR");
    assert_eq!(j.pointer("/ledger/trajectory_window").unwrap(), &6);

    let base = load_layered_yaml_from_strings(&[BASE_YAML]).unwrap();
    assert_ne!(base.config_hash, merged.config_hash);

    let again = load_layered_yaml_from_strings(&[BASE_YAML, BR_OVERLAY]).unwrap();
    assert_eq!(merged.config_hash, again.config_hash);
}

#[test]
fn invalid_yaml_is_an_error() {
    let err = load_layered_yaml_from_strings(&[BASE_YAML, "display: [unclosed"]).unwrap_err();
    assert!(format!("{err:#}").contains("invalid yaml in layer 1"), "{err:#}");
}
