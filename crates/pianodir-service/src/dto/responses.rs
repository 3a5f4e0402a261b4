//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use pianodir_core::{ContentType, PlatformCount, ShareEvent, SharePlatform, ShareStats};
use serde::Serialize;

// ============================================================================
// Share Responses
// ============================================================================

/// A recorded share event
#[derive(Debug, Clone, Serialize)]
pub struct ShareEventResponse {
    pub platform: SharePlatform,
    pub content_type: ContentType,
    pub content_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl From<&ShareEvent> for ShareEventResponse {
    fn from(event: &ShareEvent) -> Self {
        Self {
            platform: event.platform,
            content_type: event.content_type,
            content_id: event.content_id.clone(),
            user_id: event.user_id.clone(),
            timestamp: event.timestamp,
        }
    }
}

impl From<ShareEvent> for ShareEventResponse {
    fn from(event: ShareEvent) -> Self {
        Self {
            platform: event.platform,
            content_type: event.content_type,
            content_id: event.content_id,
            user_id: event.user_id,
            timestamp: event.timestamp,
        }
    }
}

/// Share statistics for a selection of content
#[derive(Debug, Clone, Serialize)]
pub struct ShareStatsResponse {
    pub total_shares: u64,
    pub recent_shares: u64,
    /// Length of the trailing window behind `recent_shares`
    pub recent_window_days: i64,
    pub by_platform: Vec<PlatformCount>,
    pub most_popular_platform: Option<SharePlatform>,
}

impl ShareStatsResponse {
    pub fn new(stats: ShareStats, recent_window_days: i64) -> Self {
        Self {
            total_shares: stats.total_shares,
            recent_shares: stats.recent_shares,
            recent_window_days,
            by_platform: stats.by_platform,
            most_popular_platform: stats.most_popular_platform,
        }
    }
}

/// Everything a client needs to perform a share
#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkResponse {
    pub platform: SharePlatform,
    /// Platform share link; `None` for platforms without one (copy)
    pub url: Option<String>,
    /// Text to place on the clipboard for the copy action
    pub clipboard_text: String,
    /// Window features for the popup the link opens in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_features: Option<String>,
}

// ============================================================================
// Interest Responses
// ============================================================================

/// Result of toggling interest in an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestToggleResponse {
    pub interested: bool,
    pub count: i64,
}

/// Whether the caller is interested in an event
#[derive(Debug, Clone, Serialize)]
pub struct InterestStatusResponse {
    pub event_id: String,
    pub interested: bool,
}

/// Number of users interested in an event
#[derive(Debug, Clone, Serialize)]
pub struct InterestCountResponse {
    pub event_id: String,
    pub count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_event_response_serialization() {
        let event = ShareEvent::new(SharePlatform::Whatsapp, ContentType::BlogPost, "b7", None);
        let json = serde_json::to_value(ShareEventResponse::from(&event)).unwrap();

        assert_eq!(json["platform"], "whatsapp");
        assert_eq!(json["content_type"], "blog_post");
        assert_eq!(json["content_id"], "b7");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_stats_response_serialization() {
        let stats = ShareStats {
            total_shares: 2,
            recent_shares: 1,
            by_platform: vec![PlatformCount {
                platform: SharePlatform::Reddit,
                count: 2,
            }],
            most_popular_platform: Some(SharePlatform::Reddit),
        };
        let json = serde_json::to_value(ShareStatsResponse::new(stats, 7)).unwrap();

        assert_eq!(json["total_shares"], 2);
        assert_eq!(json["recent_window_days"], 7);
        assert_eq!(json["by_platform"][0]["platform"], "reddit");
        assert_eq!(json["most_popular_platform"], "reddit");
    }

    #[test]
    fn test_copy_link_has_null_url() {
        let response = ShareLinkResponse {
            platform: SharePlatform::Copy,
            url: None,
            clipboard_text: "Title\n\nhttps://pianos.example".to_string(),
            window_features: None,
        };
        let json = serde_json::to_value(response).unwrap();
        assert!(json["url"].is_null());
        assert!(json.get("window_features").is_none());
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");

        let ready = ReadinessResponse::ready(false);
        assert!(!ready.is_ready());
        assert_eq!(ready.checks.storage, "unhealthy");
    }
}
