//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies also implement `Validate`.

use pianodir_core::{ContentType, ShareFilter, SharePlatform};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Share Requests
// ============================================================================

/// Record one outbound share
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordShareRequest {
    pub platform: SharePlatform,

    pub content_type: ContentType,

    #[validate(length(min = 1, max = 128, message = "Content id must be 1-128 characters"))]
    pub content_id: String,
}

/// Query string of the share statistics endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShareStatsQuery {
    pub content_id: Option<String>,
    pub content_type: Option<ContentType>,
}

impl ShareStatsQuery {
    /// Empty `content_id` values are treated as absent
    pub fn into_filter(self) -> ShareFilter {
        let content_id = self.content_id.filter(|id| !id.trim().is_empty());
        ShareFilter::new(content_id, self.content_type)
    }
}

/// Build a share link for a platform.
///
/// Either `url` or both `content_type` and `content_id` must be given; the
/// latter resolve to the content's permalink on the public site.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShareLinkRequest {
    pub platform: SharePlatform,

    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Text must be at most 2000 characters"))]
    pub text: String,

    #[validate(url(message = "Invalid url"))]
    pub url: Option<String>,

    #[validate(url(message = "Invalid image url"))]
    pub image: Option<String>,

    #[validate(length(max = 10, message = "At most 10 hashtags"))]
    pub hashtags: Option<Vec<String>>,

    pub content_type: Option<ContentType>,

    #[validate(length(min = 1, max = 128, message = "Content id must be 1-128 characters"))]
    pub content_id: Option<String>,
}
