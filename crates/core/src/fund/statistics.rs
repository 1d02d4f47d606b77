//! Statistics derived from the fund history.

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;

use super::types::{FundRecord, FundStatistics, OperationKind};

/// Folds the full history into a statistics snapshot.
///
/// The "last month" window covers entries with `date >= now - 1 calendar
/// month` (same day of the previous month, clamped to month length), not a
/// fixed 30-day duration. Everything is recomputed from the history on each
/// call.
#[must_use]
pub fn compute_statistics(record: &FundRecord, now: DateTime<Utc>) -> FundStatistics {
    let month_ago = one_month_back(now);

    let mut stats = FundStatistics {
        current_amount: record.balance,
        currency: record.currency.clone(),
        last_updated: record.last_updated,
        total_increase: Decimal::ZERO,
        total_decrease: Decimal::ZERO,
        total_transfers: Decimal::ZERO,
        last_month_increase: Decimal::ZERO,
        last_month_decrease: Decimal::ZERO,
        total_operations: record.history.len() as u64,
        last_month_operations: 0,
    };

    for entry in &record.history {
        let in_window = entry.date >= month_ago;
        if in_window {
            stats.last_month_operations += 1;
        }

        match entry.operation {
            OperationKind::Increase => {
                stats.total_increase += entry.amount;
                if in_window {
                    stats.last_month_increase += entry.amount;
                }
            }
            OperationKind::Decrease => {
                stats.total_decrease += entry.amount;
                if in_window {
                    stats.last_month_decrease += entry.amount;
                }
            }
            OperationKind::Transfer => stats.total_transfers += entry.amount,
        }
    }

    stats
}

/// Same instant one calendar month earlier, clamped to month length
/// (e.g. March 31 maps to February 28).
fn one_month_back(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(1)).unwrap_or(now)
}
