//! Test fixtures and data generators
//!
//! Provides reusable request and response shapes for integration tests.

use pianodir_core::{ContentType, SharePlatform};
use serde::{Deserialize, Serialize};

/// Unique id so tests sharing a store never collide
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

/// Record share request
#[derive(Debug, Serialize)]
pub struct RecordShareRequest {
    pub platform: SharePlatform,
    pub content_type: ContentType,
    pub content_id: String,
}

impl RecordShareRequest {
    pub fn new(platform: SharePlatform, content_type: ContentType, content_id: &str) -> Self {
        Self {
            platform,
            content_type,
            content_id: content_id.to_string(),
        }
    }
}

/// Share link request
#[derive(Debug, Default, Serialize)]
pub struct ShareLinkRequest {
    pub platform: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

/// Recorded share event
#[derive(Debug, Deserialize)]
pub struct ShareEventResponse {
    pub platform: SharePlatform,
    pub content_type: ContentType,
    pub content_id: String,
    pub user_id: Option<String>,
    pub timestamp: String,
}

/// Per-platform count
#[derive(Debug, Deserialize)]
pub struct PlatformCount {
    pub platform: SharePlatform,
    pub count: u64,
}

/// Share statistics
#[derive(Debug, Deserialize)]
pub struct ShareStatsResponse {
    pub total_shares: u64,
    pub recent_shares: u64,
    pub recent_window_days: i64,
    pub by_platform: Vec<PlatformCount>,
    pub most_popular_platform: Option<SharePlatform>,
}

impl ShareStatsResponse {
    pub fn count_for(&self, platform: SharePlatform) -> u64 {
        self.by_platform
            .iter()
            .find(|entry| entry.platform == platform)
            .map_or(0, |entry| entry.count)
    }
}

/// Share link response
#[derive(Debug, Deserialize)]
pub struct ShareLinkResponse {
    pub platform: SharePlatform,
    pub url: Option<String>,
    pub clipboard_text: String,
    pub window_features: Option<String>,
}

/// Interest toggle response
#[derive(Debug, Deserialize)]
pub struct InterestToggleResponse {
    pub interested: bool,
    pub count: i64,
}

/// Interest status response
#[derive(Debug, Deserialize)]
pub struct InterestStatusResponse {
    pub event_id: String,
    pub interested: bool,
}

/// Interest count response
#[derive(Debug, Deserialize)]
pub struct InterestCountResponse {
    pub event_id: String,
    pub count: i64,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
