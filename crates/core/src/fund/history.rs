//! History views: filtering, ordering, and pagination.
//!
//! Pure read-side projections over the fund's history list. Views order by
//! the caller-supplied effective date, newest first; entries with equal
//! dates keep their insertion order.

use super::types::{HistoryEntry, HistoryFilter, HistoryPage};

/// Applies the filter, orders by date descending, and returns one page.
///
/// The pagination metadata reports the filtered, pre-pagination match count;
/// a page past the end comes back with empty data but intact metadata.
#[must_use]
pub fn page_history(entries: &[HistoryEntry], filter: &HistoryFilter) -> HistoryPage {
    let mut matched: Vec<&HistoryEntry> = entries
        .iter()
        .filter(|entry| matches_filter(entry, filter))
        .collect();
    sort_newest_first(&mut matched);

    let total = matched.len() as u64;
    let data = matched
        .into_iter()
        .skip(filter.page.offset())
        .take(filter.page.take())
        .cloned()
        .collect();

    HistoryPage::new(data, filter.page.page, filter.page.limit, total)
}

/// Returns the `limit` most recent entries by effective date.
#[must_use]
pub fn recent_history(entries: &[HistoryEntry], limit: usize) -> Vec<HistoryEntry> {
    let mut all: Vec<&HistoryEntry> = entries.iter().collect();
    sort_newest_first(&mut all);

    all.into_iter().take(limit).cloned().collect()
}

/// Returns true if the entry passes the date-range and operation filters.
///
/// Both date bounds are inclusive.
fn matches_filter(entry: &HistoryEntry, filter: &HistoryFilter) -> bool {
    if let Some(start) = filter.start_date {
        if entry.date < start {
            return false;
        }
    }
    if let Some(end) = filter.end_date {
        if entry.date > end {
            return false;
        }
    }
    if let Some(operation) = filter.operation {
        if entry.operation != operation {
            return false;
        }
    }
    true
}

/// Stable date-descending sort; insertion order survives for equal dates.
fn sort_newest_first(entries: &mut [&HistoryEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}
