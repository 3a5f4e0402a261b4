//! Interest record entity - a user's "interested" flag for an event

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-(user, event) interest flag.
///
/// At most one record exists per pair; toggling flips `interested` in place
/// and records are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRecord {
    pub id: Uuid,
    pub user_id: String,
    pub event_id: String,
    pub interested: bool,
    pub created_at: DateTime<Utc>,
}

impl InterestRecord {
    /// Create the first record for a pair, marked interested
    pub fn new(user_id: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            event_id: event_id.into(),
            interested: true,
            created_at: Utc::now(),
        }
    }

    /// Flag value after a toggle
    #[inline]
    pub fn toggled(&self) -> bool {
        !self.interested
    }

    /// Check if the record belongs to a user and event
    pub fn is_for(&self, user_id: &str, event_id: &str) -> bool {
        self.user_id == user_id && self.event_id == event_id
    }
}
