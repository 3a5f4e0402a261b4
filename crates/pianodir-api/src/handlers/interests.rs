//! Event interest handlers
//!
//! Endpoints for toggling and reading a user's interest in an event.

use axum::{
    extract::{Path, State},
    Json,
};
use pianodir_service::dto::{InterestCountResponse, InterestStatusResponse, InterestToggleResponse};
use pianodir_service::InterestService;

use crate::extractors::CurrentUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle the caller's interest in an event
///
/// POST /api/v1/events/{event_id}/interest
pub async fn toggle_interest(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<String>,
) -> ApiResult<Json<InterestToggleResponse>> {
    let service = InterestService::new(state.service_context());
    let result = service.toggle(&event_id, &user.user_id).await?;
    Ok(Json(result))
}

/// Whether the caller is interested in an event
///
/// GET /api/v1/events/{event_id}/interest
pub async fn get_interest(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(event_id): Path<String>,
) -> Json<InterestStatusResponse> {
    let service = InterestService::new(state.service_context());
    let interested = service.get_user_interest(&event_id, &user.user_id).await;
    Json(InterestStatusResponse {
        event_id,
        interested,
    })
}

/// Number of users interested in an event
///
/// GET /api/v1/events/{event_id}/interest/count
pub async fn get_interest_count(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Json<InterestCountResponse> {
    let service = InterestService::new(state.service_context());
    let count = service.get_interest_count(&event_id).await;
    Json(InterestCountResponse { event_id, count })
}
