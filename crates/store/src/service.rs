//! Fund service - the operation surface over the repository.

use chrono::Utc;
use kompfond_core::fund::{
    self, FundError, FundLedger, FundPatch, FundRecord, FundStatistics, HistoryEntry,
    HistoryFilter, HistoryPage, NewHistoryEntry,
};
use kompfond_shared::config::FundConfig;
use kompfond_shared::types::{EntryId, UserId};
use tracing::{error, info, warn};

use crate::repository::FundRepository;

/// Operation surface of the compensation fund ledger.
///
/// Every mutation runs as read-compute-commit: the current record is read
/// (capturing its version), the successor record is computed in pure core
/// code, and the commit is a version-conditional store update. When a
/// concurrent writer wins the version check, the whole cycle is retried up
/// to the configured bound before the conflict reaches the caller.
#[derive(Debug)]
pub struct FundService<R> {
    repo: R,
    config: FundConfig,
}

impl<R: FundRepository> FundService<R> {
    /// Creates a fund service over the given repository.
    #[must_use]
    pub fn new(repo: R, config: FundConfig) -> Self {
        Self { repo, config }
    }

    /// Returns the fund record, creating it on first access.
    ///
    /// The bootstrap record has a zero balance, the configured default
    /// currency, empty bank details, an empty history, and system audit
    /// fields.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn get_fund_info(&self) -> Result<FundRecord, FundError> {
        self.repo
            .get_or_create(FundRecord::initial(
                self.config.default_currency.clone(),
                Utc::now(),
            ))
            .await
    }

    /// Applies a partial update to the fund's non-ledger fields.
    ///
    /// A present `amount` overwrites the balance and synthesizes a derived
    /// history entry for the difference in the same write. Unlike
    /// [`add_history_entry`](Self::add_history_entry), the overwrite path
    /// has no decrease guard; only a negative target is rejected.
    ///
    /// # Errors
    ///
    /// Returns `FundError::NegativeAmount` for a negative target balance,
    /// `FundError::InvalidCurrency` for a malformed currency code, and
    /// `FundError::ConcurrentModification` when the retry bound is
    /// exhausted.
    pub async fn update_fund_info(
        &self,
        patch: FundPatch,
        actor: UserId,
    ) -> Result<FundRecord, FundError> {
        // Cheap validation first; the store is never touched for a bad patch.
        FundLedger::validate_patch(&patch)?;

        let record = self
            .mutate_with_retry(|mut record| {
                let now = Utc::now();

                if let Some(target) = patch.amount {
                    if let Some(adjustment) = FundLedger::balance_patch(record.balance, target)? {
                        let description = patch
                            .description
                            .as_deref()
                            .filter(|text| !text.trim().is_empty())
                            .map_or_else(
                                || FundLedger::adjustment_description(record.balance, target),
                                ToString::to_string,
                            );
                        record.history.push(HistoryEntry {
                            id: EntryId::new(),
                            date: now,
                            operation: adjustment.operation,
                            amount: adjustment.amount,
                            description,
                            document_url: None,
                            created_at: now,
                        });
                        record.balance = target;
                    }
                }
                if let Some(code) = &patch.currency {
                    record.currency = FundLedger::normalize_currency(code)?;
                }
                if let Some(details) = &patch.bank_details {
                    record.bank_details = details.clone();
                }
                record.last_updated = now;
                record.updated_by = actor;

                Ok(record)
            })
            .await?;

        info!(
            balance = %record.balance,
            version = record.version,
            "Updated fund info"
        );
        Ok(record)
    }

    /// Records a new history entry and applies its effect to the balance.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad input, `FundError::NegativeBalance`
    /// when a decrease would overdraw the fund (nothing is written in that
    /// case), and `FundError::ConcurrentModification` when the retry bound
    /// is exhausted.
    pub async fn add_history_entry(
        &self,
        input: NewHistoryEntry,
        actor: UserId,
    ) -> Result<FundRecord, FundError> {
        // Cheap validation first; the store is never touched for bad input.
        FundLedger::validate_entry(&input)?;

        let record = self
            .mutate_with_retry(|mut record| {
                let new_balance =
                    FundLedger::apply_operation(record.balance, input.operation, input.amount)?;
                let now = Utc::now();

                record.history.push(HistoryEntry {
                    id: EntryId::new(),
                    date: input.date,
                    operation: input.operation,
                    amount: input.amount,
                    description: input.description.clone(),
                    document_url: input.document_url.clone(),
                    created_at: now,
                });
                record.balance = new_balance;
                record.last_updated = now;
                record.updated_by = actor;

                Ok(record)
            })
            .await?;

        info!(
            operation = %input.operation,
            amount = %input.amount,
            balance = %record.balance,
            "Recorded fund history entry"
        );
        Ok(record)
    }

    /// Returns one page of the history, filtered and ordered newest first.
    ///
    /// The page size is clamped to the configured maximum.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn get_history(&self, filter: HistoryFilter) -> Result<HistoryPage, FundError> {
        let record = self.get_fund_info().await?;

        let mut filter = filter;
        filter.page = filter.page.clamped(self.config.max_page_size);

        Ok(fund::page_history(&record.history, &filter))
    }

    /// Returns the most recent history entries by effective date.
    ///
    /// `limit` falls back to the configured recent-view size and is clamped
    /// to the configured maximum.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn get_recent_history(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<HistoryEntry>, FundError> {
        let record = self.get_fund_info().await?;
        let limit = limit
            .unwrap_or(self.config.recent_limit)
            .clamp(1, self.config.max_page_size);

        Ok(fund::recent_history(&record.history, limit as usize))
    }

    /// Computes the statistics snapshot from the full history.
    ///
    /// # Errors
    ///
    /// Propagates storage failures.
    pub async fn get_statistics(&self) -> Result<FundStatistics, FundError> {
        let record = self.get_fund_info().await?;

        Ok(fund::compute_statistics(&record, Utc::now()))
    }

    /// Runs one read-compute-commit cycle, retrying on version conflicts.
    ///
    /// `build` receives the current record and returns the successor to
    /// commit; it runs again with a fresh record after every conflict.
    async fn mutate_with_retry<F>(&self, build: F) -> Result<FundRecord, FundError>
    where
        F: Fn(FundRecord) -> Result<FundRecord, FundError>,
    {
        let mut attempt = 0;
        loop {
            let current = self.get_fund_info().await?;
            let expected_version = current.version;
            let next = build(current)?;

            match self.repo.update(expected_version, next).await {
                Ok(committed) => return Ok(committed),
                Err(FundError::ConcurrentModification)
                    if attempt < self.config.max_update_retries =>
                {
                    attempt += 1;
                    warn!(attempt, "Conflicting fund write, retrying");
                }
                Err(err @ FundError::ConcurrentModification) => {
                    error!(attempts = attempt, "Fund write conflict outlasted the retry bound");
                    return Err(err);
                }
                Err(err) => return Err(err),
            }
        }
    }
}
