//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, interests, shares};
use crate::state::AppState;

/// Create the main API router (health routes are separate so they bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(share_routes()).merge(interest_routes())
}

/// Share routes
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares", post(shares::record_share))
        .route("/shares/stats", get(shares::get_share_stats))
        .route("/shares/link", post(shares::create_share_link))
}

/// Event interest routes
fn interest_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events/:event_id/interest",
            post(interests::toggle_interest).get(interests::get_interest),
        )
        .route(
            "/events/:event_id/interest/count",
            get(interests::get_interest_count),
        )
}
