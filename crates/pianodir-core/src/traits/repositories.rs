//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::InterestRecord;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Interest Repository
// ============================================================================

/// Storage of event interest records.
///
/// Every method is one round-trip to the store. No method is atomic with
/// respect to another, so a lookup followed by a write can race with a
/// concurrent writer for the same pair.
#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// Find the record for a user and event
    async fn find(&self, user_id: &str, event_id: &str) -> RepoResult<Option<InterestRecord>>;

    /// Insert a new record
    async fn create(&self, record: &InterestRecord) -> RepoResult<()>;

    /// Overwrite the interested flag of an existing record
    async fn set_interested(&self, id: Uuid, interested: bool) -> RepoResult<()>;

    /// Count records for an event with `interested = true`
    async fn count_interested(&self, event_id: &str) -> RepoResult<i64>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
