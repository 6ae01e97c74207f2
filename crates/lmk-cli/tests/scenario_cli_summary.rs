//! Scenario: `lmk summary` end to end
//!
//! # Invariants under test
//!
//! 1. Plain output is `key=value` lines with money in major units, and the
//!    last trajectory line carries the wallet balance.
//! 2. `--json` prints the serialized summary (amounts in minor units).
//! 3. Config layers change labels and window, and their hash is printed.
//! 4. A missing wallet fails loudly instead of printing a zero portfolio.
//! 5. The shipped defaults pass `--strict-config` on every command that reads config.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const WALLET: &str = r#"{"balance": 120000, "currency_code": "BRL"}"#;

const TX: &str = "id,type,amount,status,created_at
t1,credit,100000,completed,2026-01-05T10:00:00Z
t2,credit,50000,completed,2026-02-10T10:00:00Z
t3,debit,20000,completed,2026-03-02T10:00:00Z
t4,credit,7000,pending,2026-03-03T10:00:00Z
";

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p
}

fn lmk() -> Command {
    Command::cargo_bin("lmk").unwrap()
}

#[test]
fn plain_summary_prints_key_values() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = write(dir.path(), "wallet.json", WALLET);
    let tx = write(dir.path(), "tx.csv", TX);

    lmk()
        .args(["summary", "--wallet"])
        .arg(&wallet)
        .arg("--transactions")
        .arg(&tx)
        .assert()
        .success()
        .stdout(predicate::str::contains("currency=BRL"))
        .stdout(predicate::str::contains("available_balance=1200.00"))
        .stdout(predicate::str::contains("invested_principal=1500.00"))
        .stdout(predicate::str::contains("historical_profit=100.00"))
        .stdout(predicate::str::contains("pending_count=1\n"))
        .stdout(predicate::str::contains("pending_credit_total=70.00\n"))
        .stdout(predicate::str::contains("pending_debit_total=0.00\n"))
        .stdout(predicate::str::contains("trajectory_points=4\n"))
        .stdout(predicate::str::contains("trajectory_0_label=Jan 2026\ntrajectory_0_balance=1000.00\n"))
        .stdout(predicate::str::contains("trajectory_3_label=current\ntrajectory_3_balance=1200.00\n"))
        .stdout(predicate::str::contains("config_hash=").not());
}

#[test]
fn json_summary_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = write(dir.path(), "wallet.json", WALLET);
    let tx = write(dir.path(), "tx.csv", TX);

    let out = lmk()
        .args(["summary", "--json", "--wallet"])
        .arg(&wallet)
        .arg("--transactions")
        .arg(&tx)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["available_balance"], 120_000);
    assert_eq!(v["historical_profit"], 10_000);
    let traj = v["monthly_trajectory"].as_array().unwrap();
    assert_eq!(traj.last().unwrap()["balance"], 120_000);
    assert_eq!(traj.len(), 4);
}

#[test]
fn config_layers_drive_labels_and_window() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = write(dir.path(), "wallet.json", WALLET);
    let tx = write(dir.path(), "tx.csv", TX);
    let cfg = write(
        dir.path(),
        "br.yaml",
        "display:\n  timezone: America/Sao_Paulo\n  locale: pt-BR\nledger:\n  trajectory_window: 2\n",
    );

    lmk()
        .args(["summary", "--wallet"])
        .arg(&wallet)
        .arg("--transactions")
        .arg(&tx)
        .arg("--config")
        .arg(&cfg)
        .assert()
        .success()
        .stdout(predicate::str::contains("config_hash="))
        .stdout(predicate::str::contains("trajectory_points=2\n"))
        .stdout(predicate::str::contains("trajectory_0_label=mar/2026\ntrajectory_0_balance=1300.00\n"))
        .stdout(predicate::str::contains("trajectory_1_label=atual\ntrajectory_1_balance=1200.00\n"))
        .stdout(predicate::str::contains("jan/2026").not());
}

#[test]
fn strict_config_rejects_unused_keys() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = write(dir.path(), "wallet.json", WALLET);
    let tx = write(dir.path(), "tx.csv", TX);
    let cfg = write(dir.path(), "typo.yaml", "ledger:\n  trajectory_windw: 3\n");

    lmk()
        .args(["summary", "--strict-config", "--wallet"])
        .arg(&wallet)
        .arg("--transactions")
        .arg(&tx)
        .arg("--config")
        .arg(&cfg)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_UNUSED_KEYS"));
}

#[test]
fn missing_wallet_fails() {
    let dir = tempfile::tempdir().unwrap();
    let tx = write(dir.path(), "tx.csv", TX);

    lmk()
        .args(["summary", "--wallet"])
        .arg(dir.path().join("absent.json"))
        .arg("--transactions")
        .arg(&tx)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("available_balance").not());
}

#[test]
fn every_plain_line_is_key_value() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = write(dir.path(), "wallet.json", WALLET);
    let tx = write(dir.path(), "tx.csv", TX);

    let out = lmk()
        .args(["summary", "--wallet"])
        .arg(&wallet)
        .arg("--transactions")
        .arg(&tx)
        .output()
        .unwrap();
    assert!(out.status.success());
    for line in String::from_utf8(out.stdout).unwrap().lines() {
        let (key, _) = line.split_once('=').unwrap_or_else(|| panic!("not key=value: {line}"));
        assert!(!key.contains(' '), "key with spaces: {line}");
    }
}

fn shipped_defaults() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/defaults/base.yaml")
}

#[test]
fn shipped_defaults_pass_strict_config_on_summary() {
    let dir = tempfile::tempdir().unwrap();
    let wallet = write(dir.path(), "wallet.json", WALLET);
    let tx = write(dir.path(), "tx.csv", TX);

    lmk()
        .args(["summary", "--strict-config", "--config"])
        .arg(shipped_defaults())
        .arg("--wallet")
        .arg(&wallet)
        .arg("--transactions")
        .arg(&tx)
        .assert()
        .success()
        .stdout(predicate::str::contains("config_hash="))
        .stderr(predicate::str::contains("CONFIG_UNUSED_KEYS").not());
}

#[test]
fn shipped_defaults_pass_strict_config_on_exit_quote() {
    lmk()
        .args(["exit-quote", "--receivable", "100", "--strict-config", "--config"])
        .arg(shipped_defaults())
        .assert()
        .success()
        .stdout(predicate::str::contains("fee_rate=2.00%"))
        .stderr(predicate::str::contains("CONFIG_UNUSED_KEYS").not());
}
