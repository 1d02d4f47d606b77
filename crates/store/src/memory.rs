//! In-memory fund store.

use std::sync::RwLock;

use async_trait::async_trait;
use kompfond_core::fund::{FundError, FundRecord};

use crate::repository::FundRepository;

/// In-memory single-record store.
///
/// Intended for tests/dev. The whole record sits behind one `RwLock`; the
/// conditional update runs compare-version-then-swap under the write lock,
/// which gives the atomicity the repository contract asks for.
#[derive(Debug, Default)]
pub struct InMemoryFundRepository {
    record: RwLock<Option<FundRecord>>,
}

impl InMemoryFundRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> FundError {
    FundError::Storage("lock poisoned".to_string())
}

#[async_trait]
impl FundRepository for InMemoryFundRepository {
    async fn find(&self) -> Result<Option<FundRecord>, FundError> {
        Ok(self.record.read().map_err(|_| poisoned())?.clone())
    }

    async fn get_or_create(&self, initial: FundRecord) -> Result<FundRecord, FundError> {
        let mut slot = self.record.write().map_err(|_| poisoned())?;

        Ok(slot.get_or_insert(initial).clone())
    }

    async fn update(
        &self,
        expected_version: i64,
        record: FundRecord,
    ) -> Result<FundRecord, FundError> {
        let mut slot = self.record.write().map_err(|_| poisoned())?;
        let current = slot.as_ref().ok_or(FundError::NotFound)?;

        if current.version != expected_version {
            return Err(FundError::ConcurrentModification);
        }

        let mut committed = record;
        committed.version = expected_version + 1;
        *slot = Some(committed.clone());

        Ok(committed)
    }
}
