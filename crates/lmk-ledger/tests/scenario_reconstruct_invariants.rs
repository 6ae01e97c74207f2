//! Scenario: portfolio reconstruction invariants hold for arbitrary logs.
//!
//! # Invariants under test
//!
//! 1. Determinism: reconstructing twice from identical inputs yields equal
//!    summaries and byte-identical JSON.
//! 2. Profit identity: `invested - completed debits - profit == balance`.
//! 3. The final trajectory point is always the wallet balance.
//! 4. Trajectory length: 1 with no completed records, otherwise between 2
//!    and the window size; periods are strictly increasing in time. A window
//!    configured below 2 still yields 2 points once activity exists.
//! 5. Permutation invariance for distinct timestamps: arrival order does not
//!    change the summary.
//!
//! All tests are pure; no IO.

use chrono::{DateTime, TimeZone, Utc};
use lmk_ledger::{
    reconstruct, reconstruct_default, Period, TrajectoryOptions, TransactionRecord, TxKind,
    TxStatus, WalletSnapshot, DEFAULT_TRAJECTORY_WINDOW,
};
use lmk_money::Money;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Offsets up to ~3 years in minutes, so logs span many months.
fn arb_record() -> impl Strategy<Value = TransactionRecord> {
    (
        0i64..(3 * 365 * 24 * 60),
        prop_oneof![Just(TxKind::Credit), Just(TxKind::Debit)],
        0i64..=10_000_000i64,
        prop_oneof![
            4 => Just(TxStatus::Completed),
            1 => Just(TxStatus::Pending),
        ],
        "[a-z0-9]{6}",
    )
        .prop_map(|(mins, kind, amount, status, id)| {
            TransactionRecord::new(
                id,
                base() + chrono::Duration::minutes(mins),
                kind,
                Money::from_minor(amount),
                status,
            )
        })
}

fn arb_wallet() -> impl Strategy<Value = WalletSnapshot> {
    (-1_000_000i64..=100_000_000i64).prop_map(|b| WalletSnapshot::new(Money::from_minor(b), "BRL"))
}

fn completed_sum(txs: &[TransactionRecord], kind: TxKind) -> Money {
    txs.iter()
        .filter(|t| t.is_completed() && t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reconstruction_is_deterministic(
        wallet in arb_wallet(),
        txs in prop::collection::vec(arb_record(), 0..60),
    ) {
        let a = reconstruct_default(&wallet, &txs);
        let b = reconstruct_default(&wallet, &txs);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn profit_identity_holds(
        wallet in arb_wallet(),
        txs in prop::collection::vec(arb_record(), 0..60),
    ) {
        let s = reconstruct_default(&wallet, &txs);
        let debits = completed_sum(&txs, TxKind::Debit);
        prop_assert_eq!(s.invested_principal, completed_sum(&txs, TxKind::Credit));
        prop_assert_eq!(s.invested_principal - debits - s.historical_profit, wallet.current_balance);
        prop_assert_eq!(s.available_balance, wallet.current_balance);
    }

    #[test]
    fn trajectory_shape_holds(
        wallet in arb_wallet(),
        txs in prop::collection::vec(arb_record(), 0..60),
    ) {
        let s = reconstruct_default(&wallet, &txs);
        let traj = &s.monthly_trajectory;

        let last = traj.last().unwrap();
        prop_assert_eq!(last.period, Period::Current);
        prop_assert_eq!(last.balance, wallet.current_balance);

        let any_completed = txs.iter().any(|t| t.is_completed());
        if any_completed {
            prop_assert!(traj.len() >= 2);
        } else {
            prop_assert_eq!(traj.len(), 1);
        }
        prop_assert!(traj.len() <= DEFAULT_TRAJECTORY_WINDOW);

        // Month < Current in Period's ordering, months ascend by (year, month).
        for w in traj.windows(2) {
            prop_assert!(w[0].period < w[1].period);
        }
    }

    #[test]
    fn arrival_order_does_not_matter(
        wallet in arb_wallet(),
        txs in prop::collection::vec(arb_record(), 1..40),
    ) {
        // Distinct timestamps: ties are the only place order may show through.
        let mut txs = txs;
        for (i, t) in txs.iter_mut().enumerate() {
            t.timestamp = t.timestamp + chrono::Duration::milliseconds(i as i64);
        }
        let mut reversed = txs.clone();
        reversed.reverse();

        let a = reconstruct_default(&wallet, &txs);
        let b = reconstruct_default(&wallet, &reversed);
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// Fixed scenarios
// ---------------------------------------------------------------------------

#[test]
fn ten_months_of_activity_keep_five_months_plus_current() {
    let txs: Vec<TransactionRecord> = (1..=10u32)
        .map(|m| {
            TransactionRecord::credit(
                format!("dep-{m}"),
                Utc.with_ymd_and_hms(2025, m, 15, 12, 0, 0).unwrap(),
                Money::from_minor(10_000),
            )
        })
        .collect();
    let wallet = WalletSnapshot::new(Money::from_minor(123_400), "BRL");
    let s = reconstruct_default(&wallet, &txs);

    assert_eq!(s.monthly_trajectory.len(), 6);
    let months: Vec<Period> = s.monthly_trajectory.iter().map(|p| p.period).collect();
    assert_eq!(
        months,
        [
            Period::Month { year: 2025, month: 6 },
            Period::Month { year: 2025, month: 7 },
            Period::Month { year: 2025, month: 8 },
            Period::Month { year: 2025, month: 9 },
            Period::Month { year: 2025, month: 10 },
            Period::Current,
        ]
    );
    // Running balance after six deposits of 100.00.
    assert_eq!(s.monthly_trajectory[0].balance, Money::from_minor(60_000));
    assert_eq!(s.closing_balance(), Money::from_minor(123_400));
}

#[test]
fn same_timestamp_records_keep_arrival_order_within_month() {
    let t = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
    let txs = vec![
        TransactionRecord::credit("a", t, Money::from_minor(500)),
        TransactionRecord::debit("b", t, Money::from_minor(200)),
    ];
    let s = reconstruct_default(&WalletSnapshot::new(Money::from_minor(300), "BRL"), &txs);
    // Both land in April; the month closes at the running total after the last one.
    assert_eq!(s.monthly_trajectory[0].balance, Money::from_minor(300));
}

#[test]
fn custom_window_and_locale_are_respected() {
    let txs: Vec<TransactionRecord> = (1..=4u32)
        .map(|m| {
            TransactionRecord::credit(
                format!("d{m}"),
                Utc.with_ymd_and_hms(2026, m, 2, 0, 0, 0).unwrap(),
                Money::from_minor(100),
            )
        })
        .collect();
    let opts = TrajectoryOptions {
        timezone: chrono_tz::America::Sao_Paulo,
        locale: lmk_ledger::Locale::PtBr,
        window: 3,
    };
    let s = reconstruct(&WalletSnapshot::new(Money::from_minor(400), "BRL"), &txs, &opts);
    let labels: Vec<&str> = s.monthly_trajectory.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["mar/2026", "abr/2026", "atual"]);
}

#[test]
fn window_of_one_still_draws_a_slope() {
    let txs = vec![TransactionRecord::credit(
        "d1",
        Utc.with_ymd_and_hms(2026, 5, 2, 0, 0, 0).unwrap(),
        Money::from_minor(500),
    )];
    let opts = TrajectoryOptions {
        window: 1,
        ..TrajectoryOptions::default()
    };
    let s = reconstruct(&WalletSnapshot::new(Money::from_minor(450), "BRL"), &txs, &opts);
    assert_eq!(s.monthly_trajectory.len(), 2);
    assert_eq!(s.monthly_trajectory[0].balance, Money::from_minor(500));
    assert_eq!(s.closing_balance(), Money::from_minor(450));
}
