//! Property-based tests for the fund ledger.
//!
//! Covered properties:
//! - Balance integrity: the balance never goes negative
//! - Conservation: balance equals increases minus decreases
//! - Balance overwrites land exactly on their target
//! - History pages partition the date-ordered history
//! - Statistics totals match per-kind sums

use chrono::{Duration, TimeZone, Utc};
use kompfond_shared::types::{EntryId, PageRequest};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::FundError;
use super::history;
use super::ledger::FundLedger;
use super::statistics::compute_statistics;
use super::types::{FundRecord, HistoryEntry, HistoryFilter, OperationKind};

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate operation kinds.
fn operation_strategy() -> impl Strategy<Value = OperationKind> {
    prop_oneof![
        Just(OperationKind::Increase),
        Just(OperationKind::Decrease),
        Just(OperationKind::Transfer),
    ]
}

/// Strategy to generate operation sequences.
fn operations_strategy(max_len: usize) -> impl Strategy<Value = Vec<(OperationKind, Decimal)>> {
    prop::collection::vec((operation_strategy(), positive_amount()), 1..=max_len)
}

/// Helper to create a history entry dated relative to mid-2026.
fn make_entry(day_offset: i64, operation: OperationKind, amount: Decimal) -> HistoryEntry {
    let date = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap() + Duration::days(day_offset);
    HistoryEntry {
        id: EntryId::new(),
        date,
        operation,
        amount,
        description: "generated entry".to_string(),
        document_url: None,
        created_at: date,
    }
}

/// Strategy to generate histories with scattered effective dates.
fn entries_strategy(max_len: usize) -> impl Strategy<Value = Vec<HistoryEntry>> {
    prop::collection::vec(
        (-400i64..400i64, operation_strategy(), positive_amount()),
        0..=max_len,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(offset, operation, amount)| make_entry(offset, operation, amount))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Balance integrity and conservation
    // =========================================================================

    /// *For any* operation sequence, folding the accepted operations keeps
    /// the balance non-negative after every step.
    #[test]
    fn prop_balance_never_negative(ops in operations_strategy(30)) {
        let mut balance = Decimal::ZERO;

        for (operation, amount) in ops {
            if let Ok(next) = FundLedger::apply_operation(balance, operation, amount) {
                balance = next;
            }
            prop_assert!(balance >= Decimal::ZERO);
        }
    }

    /// *For any* operation sequence, the final balance equals the sum of
    /// accepted increases minus accepted decreases; transfers never move it.
    #[test]
    fn prop_conservation(ops in operations_strategy(30)) {
        let mut balance = Decimal::ZERO;
        let mut increases = Decimal::ZERO;
        let mut decreases = Decimal::ZERO;

        for (operation, amount) in ops {
            if let Ok(next) = FundLedger::apply_operation(balance, operation, amount) {
                balance = next;
                match operation {
                    OperationKind::Increase => increases += amount,
                    OperationKind::Decrease => decreases += amount,
                    OperationKind::Transfer => {}
                }
            }
        }

        prop_assert_eq!(balance, increases - decreases);
    }

    /// *For any* balance, a decrease that overdraws it SHALL be rejected with
    /// the invariant error.
    #[test]
    fn prop_overdraw_rejected(balance in positive_amount(), extra in positive_amount()) {
        let result = FundLedger::apply_operation(
            balance,
            OperationKind::Decrease,
            balance + extra,
        );

        prop_assert!(
            matches!(result, Err(FundError::NegativeBalance { .. })),
            "expected NegativeBalance error, got {:?}",
            result
        );
    }

    /// *For any* amount, a transfer leaves the balance untouched.
    #[test]
    fn prop_transfer_neutral(balance in positive_amount(), amount in positive_amount()) {
        let next = FundLedger::apply_operation(balance, OperationKind::Transfer, amount).unwrap();

        prop_assert_eq!(next, balance);
    }

    /// *For any* non-negative target, applying the synthesized adjustment to
    /// the current balance lands exactly on the target.
    #[test]
    fn prop_balance_patch_reaches_target(
        current in positive_amount(),
        target in positive_amount(),
    ) {
        match FundLedger::balance_patch(current, target).unwrap() {
            Some(adjustment) => {
                let landed = FundLedger::apply_operation(
                    current,
                    adjustment.operation,
                    adjustment.amount,
                ).unwrap();
                prop_assert_eq!(landed, target);
                prop_assert!(adjustment.amount > Decimal::ZERO);
            }
            None => prop_assert_eq!(current, target),
        }
    }

    // =========================================================================
    // History pagination
    // =========================================================================

    /// *For any* history and page size, concatenating the pages reproduces
    /// the full date-descending history exactly once, and the metadata
    /// reports the integer-ceiling page count.
    #[test]
    fn prop_pages_partition_history(
        entries in entries_strategy(40),
        limit in 1u32..=15,
    ) {
        let filter_for = |page| HistoryFilter {
            page: PageRequest { page, limit },
            ..HistoryFilter::default()
        };

        let first = history::page_history(&entries, &filter_for(1));
        prop_assert_eq!(first.pagination.total, entries.len() as u64);
        prop_assert_eq!(
            first.pagination.total_pages,
            (entries.len() as u64).div_ceil(u64::from(limit))
        );

        let mut collected = Vec::new();
        let mut page = 1u32;
        loop {
            let result = history::page_history(&entries, &filter_for(page));
            if result.data.is_empty() {
                break;
            }
            prop_assert!(result.data.len() <= limit as usize);
            collected.extend(result.data);
            page += 1;
        }

        let mut expected: Vec<&HistoryEntry> = entries.iter().collect();
        expected.sort_by(|a, b| b.date.cmp(&a.date));

        prop_assert_eq!(collected.len(), expected.len());
        for (got, want) in collected.iter().zip(expected) {
            prop_assert_eq!(got.id, want.id);
        }
    }

    /// *For any* history, every page is ordered newest first.
    #[test]
    fn prop_page_data_sorted_descending(
        entries in entries_strategy(40),
        limit in 1u32..=15,
        page in 1u32..=5,
    ) {
        let filter = HistoryFilter {
            page: PageRequest { page, limit },
            ..HistoryFilter::default()
        };

        let result = history::page_history(&entries, &filter);

        for pair in result.data.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// *For any* history, statistics totals match the per-kind sums and the
    /// last-month tallies never exceed the overall ones.
    #[test]
    fn prop_statistics_totals(entries in entries_strategy(40)) {
        let now = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let mut record = FundRecord::initial("RUB", now);
        record.history = entries.clone();

        let stats = compute_statistics(&record, now);

        let sum_of = |kind: OperationKind| -> Decimal {
            entries
                .iter()
                .filter(|entry| entry.operation == kind)
                .map(|entry| entry.amount)
                .sum()
        };

        prop_assert_eq!(stats.total_increase, sum_of(OperationKind::Increase));
        prop_assert_eq!(stats.total_decrease, sum_of(OperationKind::Decrease));
        prop_assert_eq!(stats.total_transfers, sum_of(OperationKind::Transfer));
        prop_assert_eq!(stats.total_operations, entries.len() as u64);
        prop_assert!(stats.last_month_operations <= stats.total_operations);
        prop_assert!(stats.last_month_increase <= stats.total_increase);
        prop_assert!(stats.last_month_decrease <= stats.total_decrease);
    }
}
