//! In-memory interest store
//!
//! `InterestRepository` backed by `DashMap`, for the `memory` storage backend
//! and for tests.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use pianodir_core::{DomainError, InterestRecord, InterestRepository, RepoResult};
use tracing::debug;
use uuid::Uuid;

/// In-memory interest records
#[derive(Debug, Default)]
pub struct MemoryInterestRepository {
    /// Records by id
    records: DashMap<Uuid, InterestRecord>,

    /// (user_id, event_id) to record id; enforces one record per pair
    by_pair: DashMap<(String, String), Uuid>,
}

impl MemoryInterestRepository {
    /// Create a new, empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new store wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of stored records, interested or not
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl InterestRepository for MemoryInterestRepository {
    async fn find(&self, user_id: &str, event_id: &str) -> RepoResult<Option<InterestRecord>> {
        let key = (user_id.to_string(), event_id.to_string());
        let Some(id) = self.by_pair.get(&key).map(|entry| *entry) else {
            return Ok(None);
        };
        Ok(self.records.get(&id).map(|entry| entry.clone()))
    }

    async fn create(&self, record: &InterestRecord) -> RepoResult<()> {
        let key = (record.user_id.clone(), record.event_id.clone());

        // Same contract as the unique index on the PostgreSQL table
        match self.by_pair.entry(key) {
            Entry::Occupied(_) => {
                return Err(DomainError::DatabaseError(format!(
                    "interest record already exists for user {} and event {}",
                    record.user_id, record.event_id
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(record.id);
            }
        }
        self.records.insert(record.id, record.clone());

        debug!(record_id = %record.id, "Interest record stored");
        Ok(())
    }

    async fn set_interested(&self, id: Uuid, interested: bool) -> RepoResult<()> {
        match self.records.get_mut(&id) {
            Some(mut record) => {
                record.interested = interested;
                Ok(())
            }
            None => Err(DomainError::DatabaseError(format!(
                "interest record {id} does not exist"
            ))),
        }
    }

    async fn count_interested(&self, event_id: &str) -> RepoResult<i64> {
        let count = self
            .records
            .iter()
            .filter(|entry| entry.event_id == event_id && entry.interested)
            .count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }
}
