//! Repository port - storage abstraction for the fund record.

use std::sync::Arc;

use async_trait::async_trait;
use kompfond_core::fund::{FundError, FundRecord};

/// Storage abstraction over the single fund record.
///
/// The ledger needs three primitives from its store: a full-record read, a
/// create-if-absent bootstrap, and a conditional write that only lands when
/// the caller still holds the latest version. Implementations must apply
/// the conditional write atomically, so concurrent writers serialize on the
/// version check instead of overwriting each other.
#[async_trait]
pub trait FundRepository: Send + Sync {
    /// Reads the current record, if one exists.
    async fn find(&self) -> Result<Option<FundRecord>, FundError>;

    /// Returns the existing record, or persists and returns `initial` when
    /// none exists yet. At most one record ever comes into existence.
    async fn get_or_create(&self, initial: FundRecord) -> Result<FundRecord, FundError>;

    /// Replaces the record, provided the stored version still equals
    /// `expected_version`. Bumps the version on success and returns the
    /// record as stored.
    ///
    /// # Errors
    ///
    /// Returns `FundError::ConcurrentModification` when another writer
    /// committed first and `FundError::NotFound` when no record exists.
    async fn update(
        &self,
        expected_version: i64,
        record: FundRecord,
    ) -> Result<FundRecord, FundError>;
}

#[async_trait]
impl<R> FundRepository for Arc<R>
where
    R: FundRepository + ?Sized,
{
    async fn find(&self) -> Result<Option<FundRecord>, FundError> {
        (**self).find().await
    }

    async fn get_or_create(&self, initial: FundRecord) -> Result<FundRecord, FundError> {
        (**self).get_or_create(initial).await
    }

    async fn update(
        &self,
        expected_version: i64,
        record: FundRecord,
    ) -> Result<FundRecord, FundError> {
        (**self).update(expected_version, record).await
    }
}
