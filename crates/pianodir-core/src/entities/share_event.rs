//! Share event entity - one recorded outbound share of a content item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ContentType, SharePlatform};

/// A single recorded share. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareEvent {
    pub platform: SharePlatform,
    pub content_type: ContentType,
    pub content_id: String,
    pub user_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ShareEvent {
    /// Create a new ShareEvent stamped with the current time
    pub fn new(
        platform: SharePlatform,
        content_type: ContentType,
        content_id: impl Into<String>,
        user_id: Option<String>,
    ) -> Self {
        Self::at(platform, content_type, content_id, user_id, Utc::now())
    }

    /// Create a ShareEvent with an explicit timestamp
    pub fn at(
        platform: SharePlatform,
        content_type: ContentType,
        content_id: impl Into<String>,
        user_id: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            platform,
            content_type,
            content_id: content_id.into(),
            user_id,
            timestamp,
        }
    }

    /// Check if the share was made by a signed-in user
    #[inline]
    pub fn is_attributed(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Selection of share events by content item.
///
/// Both fields are optional; set fields combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareFilter {
    pub content_id: Option<String>,
    pub content_type: Option<ContentType>,
}

impl ShareFilter {
    /// Filter that matches every event
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(content_id: Option<String>, content_type: Option<ContentType>) -> Self {
        Self {
            content_id,
            content_type,
        }
    }

    /// Filter for a single content item
    pub fn content(content_type: ContentType, content_id: impl Into<String>) -> Self {
        Self::new(Some(content_id.into()), Some(content_type))
    }

    pub fn by_type(content_type: ContentType) -> Self {
        Self::new(None, Some(content_type))
    }

    pub fn by_id(content_id: impl Into<String>) -> Self {
        Self::new(Some(content_id.into()), None)
    }

    /// Check whether an event passes this filter
    pub fn matches(&self, event: &ShareEvent) -> bool {
        self.content_id
            .as_deref()
            .map_or(true, |id| event.content_id == id)
            && self
                .content_type
                .map_or(true, |ty| event.content_type == ty)
    }
}
