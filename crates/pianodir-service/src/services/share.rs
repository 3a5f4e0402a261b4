//! Share service
//!
//! Records outbound shares, aggregates share statistics, and performs the
//! share action itself through the host capabilities in the context.

use chrono::{DateTime, Utc};
use pianodir_core::{
    CapabilityError, ContentType, ShareData, ShareEvent, ShareFilter, SharePlatform, ShareStats,
};
use tracing::{debug, info, instrument, warn};

use crate::dto::{ShareLinkRequest, ShareLinkResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Share service
pub struct ShareService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ShareService<'a> {
    /// Create a new ShareService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a share of a content item. Always succeeds.
    #[instrument(skip(self))]
    pub fn record(
        &self,
        platform: SharePlatform,
        content_type: ContentType,
        content_id: &str,
        user_id: Option<&str>,
    ) -> ShareEvent {
        let event = ShareEvent::new(
            platform,
            content_type,
            content_id,
            user_id.map(ToString::to_string),
        );
        self.ctx.share_log().append(event.clone());

        info!(
            platform = %platform,
            content_type = %content_type,
            content_id = %content_id,
            "Share recorded"
        );

        event
    }

    /// Share statistics for the matching content, as of now
    pub fn aggregate(
        &self,
        content_id: Option<&str>,
        content_type: Option<ContentType>,
    ) -> ShareStats {
        let filter = ShareFilter::new(content_id.map(ToString::to_string), content_type);
        self.aggregate_at(&filter, Utc::now())
    }

    /// Share statistics for the matching content, as of `now`
    pub fn aggregate_at(&self, filter: &ShareFilter, now: DateTime<Utc>) -> ShareStats {
        let window = self.ctx.recent_window();
        self.ctx.share_log().with_events(|events| {
            ShareStats::compute(
                events.iter().filter(|event| filter.matches(event)),
                now,
                window,
            )
        })
    }

    /// Platform share link for a payload; `None` for copy
    pub fn build_share_url(&self, platform: SharePlatform, data: &ShareData) -> Option<String> {
        data.share_url(platform)
    }

    /// Payload for a link request: an explicit url, or the content's permalink
    pub fn share_data_for(&self, req: &ShareLinkRequest) -> ServiceResult<ShareData> {
        let url = match (&req.url, req.content_type, &req.content_id) {
            (Some(url), _, _) => url.clone(),
            (None, Some(content_type), Some(content_id)) => {
                content_type.permalink(&self.ctx.share_config().site_base_url, content_id)
            }
            _ => {
                return Err(ServiceError::validation(
                    "either url or content_type and content_id are required",
                ))
            }
        };

        let mut data = ShareData::new(req.title.clone(), req.text.clone(), url);
        data.image.clone_from(&req.image);
        data.hashtags.clone_from(&req.hashtags);
        Ok(data)
    }

    /// Everything a client needs to share through one platform
    #[instrument(skip(self, req), fields(platform = %req.platform))]
    pub fn link(&self, req: &ShareLinkRequest) -> ServiceResult<ShareLinkResponse> {
        let data = self.share_data_for(req)?;
        let url = self.build_share_url(req.platform, &data);
        let window_features = url
            .as_ref()
            .map(|_| self.ctx.popup_features().to_string());

        Ok(ShareLinkResponse {
            platform: req.platform,
            url,
            clipboard_text: data.clipboard_text(),
            window_features,
        })
    }

    /// Copy the payload's clipboard text.
    ///
    /// Tries the primary clipboard first and falls back to the legacy one when
    /// the primary is missing or fails. Returns whether either succeeded.
    #[instrument(skip(self, data))]
    pub async fn copy_to_clipboard(&self, data: &ShareData) -> bool {
        let text = data.clipboard_text();

        if let Some(clipboard) = self.ctx.clipboard() {
            match clipboard.write_text(&text).await {
                Ok(()) => return true,
                Err(e) => debug!(error = %e, "Primary clipboard failed, trying fallback"),
            }
        }

        match self.ctx.legacy_clipboard() {
            Some(clipboard) => match clipboard.write_text(&text).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Copy to clipboard failed");
                    false
                }
            },
            None => {
                warn!("No clipboard available");
                false
            }
        }
    }

    /// Present the native share sheet. Unsupported or cancelled yields `false`.
    #[instrument(skip(self, data))]
    pub async fn share_native(&self, data: &ShareData) -> bool {
        let Some(sheet) = self.ctx.share_sheet() else {
            debug!("Native share not supported");
            return false;
        };

        match sheet.share(data).await {
            Ok(()) => true,
            Err(CapabilityError::Cancelled) => {
                debug!("Native share cancelled");
                false
            }
            Err(e) => {
                warn!(error = %e, "Native share failed");
                false
            }
        }
    }

    /// Perform a share and record it when it went through.
    ///
    /// Copy goes to the clipboard; every other platform opens its share link
    /// in a popup window.
    #[instrument(skip(self, data))]
    pub async fn share_to(
        &self,
        platform: SharePlatform,
        content_type: ContentType,
        content_id: &str,
        data: &ShareData,
        user_id: Option<&str>,
    ) -> bool {
        let shared = match self.build_share_url(platform, data) {
            None => self.copy_to_clipboard(data).await,
            Some(link) => self.open_popup(&link),
        };

        if shared {
            self.record(platform, content_type, content_id, user_id);
        }
        shared
    }

    fn open_popup(&self, link: &str) -> bool {
        let Some(opener) = self.ctx.window_opener() else {
            warn!("No window opener available");
            return false;
        };

        match opener.open(link, self.ctx.popup_features()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Opening share window failed");
                false
            }
        }
    }
}
