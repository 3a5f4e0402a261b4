//! Interest service
//!
//! Per-user "interested" flag on events. Reads degrade to their default value
//! when the store is unreachable; toggles surface the failure.

use pianodir_core::InterestRecord;
use tracing::{info, instrument, warn};

use crate::dto::InterestToggleResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Interest service
pub struct InterestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InterestService<'a> {
    /// Create a new InterestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the caller's interest in an event and return the new state with
    /// the event's updated count.
    ///
    /// A first toggle creates the record as interested. Concurrent toggles of
    /// the same pair are not serialized: the lookup and the write are separate
    /// round-trips, so the last writer wins.
    #[instrument(skip(self))]
    pub async fn toggle(&self, event_id: &str, user_id: &str) -> ServiceResult<InterestToggleResponse> {
        let repo = self.ctx.interest_repo();

        let interested = match repo.find(user_id, event_id).await? {
            Some(record) => {
                let interested = record.toggled();
                repo.set_interested(record.id, interested).await?;
                interested
            }
            None => {
                repo.create(&InterestRecord::new(user_id, event_id)).await?;
                true
            }
        };

        let count = repo.count_interested(event_id).await?;

        info!(
            event_id = %event_id,
            user_id = %user_id,
            interested,
            count,
            "Interest toggled"
        );

        Ok(InterestToggleResponse { interested, count })
    }

    /// Whether the user is interested in the event; `false` when unknown or
    /// when the store is unreachable
    #[instrument(skip(self))]
    pub async fn get_user_interest(&self, event_id: &str, user_id: &str) -> bool {
        match self.ctx.interest_repo().find(user_id, event_id).await {
            Ok(record) => record.is_some_and(|r| r.interested),
            Err(e) => {
                warn!(error = %e, "Interest lookup failed, reporting not interested");
                false
            }
        }
    }

    /// Number of users interested in the event; `0` when the store is unreachable
    #[instrument(skip(self))]
    pub async fn get_interest_count(&self, event_id: &str) -> i64 {
        match self.ctx.interest_repo().count_interested(event_id).await {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "Interest count failed, reporting zero");
                0
            }
        }
    }

    /// Whether the interest store answers
    pub async fn storage_ready(&self) -> bool {
        match self.ctx.interest_repo().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Interest store not ready");
                false
            }
        }
    }
}
