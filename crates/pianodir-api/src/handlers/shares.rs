//! Share handlers
//!
//! Endpoints for recording shares, share statistics and share links.

use axum::{extract::State, Json};
use pianodir_service::dto::{
    RecordShareRequest, ShareEventResponse, ShareLinkRequest, ShareLinkResponse, ShareStatsQuery,
    ShareStatsResponse,
};
use pianodir_service::ShareService;

use crate::extractors::{ApiQuery, OptionalCurrentUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record a share
///
/// POST /api/v1/shares
pub async fn record_share(
    State(state): State<AppState>,
    user: OptionalCurrentUser,
    ValidatedJson(req): ValidatedJson<RecordShareRequest>,
) -> ApiResult<Created<Json<ShareEventResponse>>> {
    let service = ShareService::new(state.service_context());
    let event = service.record(req.platform, req.content_type, &req.content_id, user.user_id());
    Ok(Created(Json(event.into())))
}

/// Share statistics, optionally narrowed to a content type and/or id
///
/// GET /api/v1/shares/stats?content_id=&content_type=
pub async fn get_share_stats(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ShareStatsQuery>,
) -> Json<ShareStatsResponse> {
    let ctx = state.service_context();
    let filter = query.into_filter();
    let stats = ShareService::new(ctx).aggregate(filter.content_id.as_deref(), filter.content_type);
    Json(ShareStatsResponse::new(
        stats,
        ctx.share_config().recent_window_days,
    ))
}

/// Share link, clipboard text and popup features for one platform
///
/// POST /api/v1/shares/link
pub async fn create_share_link(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ShareLinkRequest>,
) -> ApiResult<Json<ShareLinkResponse>> {
    let service = ShareService::new(state.service_context());
    Ok(Json(service.link(&req)?))
}
