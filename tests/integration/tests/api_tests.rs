//! API Integration Tests
//!
//! Run against an in-memory store; the PostgreSQL tests additionally need
//! DATABASE_URL and are skipped without it.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_postgres_env, fixtures::*, TestServer,
};
use pianodir_core::{ContentType, SharePlatform};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/shares/stats").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Share Tests
// ============================================================================

#[tokio::test]
async fn test_record_share() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RecordShareRequest::new(SharePlatform::Telegram, ContentType::Event, "e1");

    let response = server.post_as("/api/v1/shares", "u1", &request).await.unwrap();
    let event: ShareEventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(event.platform, SharePlatform::Telegram);
    assert_eq!(event.content_type, ContentType::Event);
    assert_eq!(event.content_id, "e1");
    assert_eq!(event.user_id.as_deref(), Some("u1"));
    assert!(!event.timestamp.is_empty());
}

#[tokio::test]
async fn test_record_share_anonymous() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RecordShareRequest::new(SharePlatform::Copy, ContentType::BlogPost, "b1");

    let response = server.post("/api/v1/shares", &request).await.unwrap();
    let event: ShareEventResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(event.user_id.is_none());
}

#[tokio::test]
async fn test_record_share_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RecordShareRequest::new(SharePlatform::Email, ContentType::Piano, "");

    let response = server.post("/api/v1/shares", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_share_stats_by_content_type() {
    let server = TestServer::start().await.expect("Failed to start server");

    for (platform, content_type, id) in [
        (SharePlatform::Facebook, ContentType::Piano, "p1"),
        (SharePlatform::Twitter, ContentType::Piano, "p1"),
        (SharePlatform::Facebook, ContentType::Event, "e1"),
    ] {
        let request = RecordShareRequest::new(platform, content_type, id);
        let response = server.post("/api/v1/shares", &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get("/api/v1/shares/stats?content_type=piano")
        .await
        .unwrap();
    let stats: ShareStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(stats.total_shares, 2);
    assert_eq!(stats.recent_shares, 2);
    assert_eq!(stats.recent_window_days, 7);
    assert_eq!(stats.count_for(SharePlatform::Facebook), 1);
    assert_eq!(stats.count_for(SharePlatform::Twitter), 1);
    assert_eq!(stats.most_popular_platform, Some(SharePlatform::Facebook));

    let response = server.get("/api/v1/shares/stats").await.unwrap();
    let all: ShareStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.total_shares, 3);

    let response = server
        .get("/api/v1/shares/stats?content_id=e1&content_type=piano")
        .await
        .unwrap();
    let none: ShareStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(none.total_shares, 0);
    assert!(none.most_popular_platform.is_none());
}

#[tokio::test]
async fn test_share_link_for_url() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = ShareLinkRequest {
        platform: "twitter".to_string(),
        title: "Piano at the park".to_string(),
        url: Some("https://pianos.example/pianos/7".to_string()),
        hashtags: Some(vec!["#streetpiano".to_string(), "music".to_string()]),
        ..Default::default()
    };

    let response = server.post("/api/v1/shares/link", &request).await.unwrap();
    let link: ShareLinkResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(link.platform, SharePlatform::Twitter);
    assert_eq!(
        link.url.as_deref(),
        Some(
            "https://twitter.com/intent/tweet?text=Piano%20at%20the%20park\
             &url=https%3A%2F%2Fpianos.example%2Fpianos%2F7&hashtags=streetpiano%2Cmusic"
        )
    );
    assert_eq!(link.window_features.as_deref(), Some("width=600,height=400"));
    assert_eq!(
        link.clipboard_text,
        "Piano at the park\n\nhttps://pianos.example/pianos/7"
    );
}

#[tokio::test]
async fn test_share_link_copy_has_no_url() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = ShareLinkRequest {
        platform: "copy".to_string(),
        title: "Open mic".to_string(),
        content_type: Some("event".to_string()),
        content_id: Some("e9".to_string()),
        ..Default::default()
    };

    let response = server.post("/api/v1/shares/link", &request).await.unwrap();
    let link: ShareLinkResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(link.url.is_none());
    assert!(link.window_features.is_none());
    assert_eq!(link.clipboard_text, "Open mic\n\nhttp://localhost:3000/events/e9");
}

#[tokio::test]
async fn test_share_link_unknown_platform() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = ShareLinkRequest {
        platform: "myspace".to_string(),
        title: "Piano".to_string(),
        url: Some("https://pianos.example/pianos/1".to_string()),
        ..Default::default()
    };

    let response = server.post("/api/v1/shares/link", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_share_link_without_target() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = ShareLinkRequest {
        platform: "facebook".to_string(),
        title: "Piano".to_string(),
        ..Default::default()
    };

    let response = server.post("/api/v1/shares/link", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
}

// ============================================================================
// Interest Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_interest_sequence() {
    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/api/v1/events/{}/interest", unique_id("event"));

    let expected = [(true, 1), (false, 0), (true, 1)];
    for (interested, count) in expected {
        let response = server.post_empty(&path, Some("u1")).await.unwrap();
        let toggle: InterestToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(toggle.interested, interested);
        assert_eq!(toggle.count, count);
    }
}

#[tokio::test]
async fn test_interest_status_and_count() {
    let server = TestServer::start().await.expect("Failed to start server");
    let event_id = unique_id("event");
    let path = format!("/api/v1/events/{event_id}/interest");

    for user in ["u1", "u2", "u3", "u4"] {
        let response = server.post_empty(&path, Some(user)).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let response = server.post_empty(&path, Some("u4")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("{path}/count")).await.unwrap();
    let count: InterestCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.event_id, event_id);
    assert_eq!(count.count, 3);

    let response = server.get_as(&path, "u1").await.unwrap();
    let status: InterestStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.interested);

    let response = server.get_as(&path, "u4").await.unwrap();
    let status: InterestStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.interested);

    let response = server.get_as(&path, "stranger").await.unwrap();
    let status: InterestStatusResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!status.interested);
}

#[tokio::test]
async fn test_interest_requires_identity() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_empty("/api/v1/events/e1/interest", None)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_IDENTITY");

    let response = server.get("/api/v1/events/e1/interest").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_count_for_unknown_event_is_zero() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/v1/events/{}/interest/count", unique_id("event")))
        .await
        .unwrap();
    let count: InterestCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.count, 0);
}

// ============================================================================
// PostgreSQL-backed Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_interest_postgres() {
    if !check_postgres_env() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let path = format!("/api/v1/events/{}/interest", unique_id("event"));

    let response = server.post_empty(&path, Some("u1")).await.unwrap();
    let first: InterestToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.interested);
    assert_eq!(first.count, 1);

    let response = server.post_empty(&path, Some("u1")).await.unwrap();
    let second: InterestToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!second.interested);
    assert_eq!(second.count, 0);

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
