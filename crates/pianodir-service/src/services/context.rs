//! Service context - dependency container for services
//!
//! Holds the interest store, the share event log, the host capabilities used
//! for outbound sharing, and the share settings.

use std::sync::Arc;

use pianodir_cache::ShareEventLog;
use pianodir_common::ShareConfig;
use pianodir_core::{Clipboard, InterestRepository, PopupFeatures, ShareSheet, WindowOpener};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone: every member is a shared handle. Host capabilities are
/// optional because a server process has none of them, while an embedded
/// client may have all of them.
#[derive(Clone)]
pub struct ServiceContext {
    // Stores
    interest_repo: Arc<dyn InterestRepository>,
    share_log: ShareEventLog,

    // Host capabilities
    clipboard: Option<Arc<dyn Clipboard>>,
    legacy_clipboard: Option<Arc<dyn Clipboard>>,
    share_sheet: Option<Arc<dyn ShareSheet>>,
    window_opener: Option<Arc<dyn WindowOpener>>,

    // Settings
    share_config: ShareConfig,
}

impl ServiceContext {
    /// Create a context with a store and share log and no host capabilities
    pub fn new(
        interest_repo: Arc<dyn InterestRepository>,
        share_log: ShareEventLog,
        share_config: ShareConfig,
    ) -> Self {
        Self {
            interest_repo,
            share_log,
            clipboard: None,
            legacy_clipboard: None,
            share_sheet: None,
            window_opener: None,
            share_config,
        }
    }

    // === Stores ===

    /// Get the interest repository
    pub fn interest_repo(&self) -> &dyn InterestRepository {
        self.interest_repo.as_ref()
    }

    /// Get the share event log
    pub fn share_log(&self) -> &ShareEventLog {
        &self.share_log
    }

    // === Host capabilities ===

    /// Primary clipboard, if the host has one
    pub fn clipboard(&self) -> Option<&dyn Clipboard> {
        self.clipboard.as_deref()
    }

    /// Fallback clipboard used when the primary one is missing or fails
    pub fn legacy_clipboard(&self) -> Option<&dyn Clipboard> {
        self.legacy_clipboard.as_deref()
    }

    pub fn share_sheet(&self) -> Option<&dyn ShareSheet> {
        self.share_sheet.as_deref()
    }

    pub fn window_opener(&self) -> Option<&dyn WindowOpener> {
        self.window_opener.as_deref()
    }

    // === Settings ===

    pub fn share_config(&self) -> &ShareConfig {
        &self.share_config
    }

    /// Size of the popup window share links open in
    pub fn popup_features(&self) -> PopupFeatures {
        PopupFeatures::new(self.share_config.popup_width, self.share_config.popup_height)
    }

    /// Trailing window counted as recent in share statistics.
    /// Saturates at `Duration::MAX` for day counts chrono cannot represent.
    pub fn recent_window(&self) -> chrono::Duration {
        chrono::Duration::try_days(self.share_config.recent_window_days)
            .unwrap_or(chrono::Duration::MAX)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("interest_repo", &"dyn InterestRepository")
            .field("share_log", &self.share_log)
            .field("clipboard", &self.clipboard.is_some())
            .field("legacy_clipboard", &self.legacy_clipboard.is_some())
            .field("share_sheet", &self.share_sheet.is_some())
            .field("window_opener", &self.window_opener.is_some())
            .field("share_config", &self.share_config)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    interest_repo: Option<Arc<dyn InterestRepository>>,
    share_log: Option<ShareEventLog>,
    clipboard: Option<Arc<dyn Clipboard>>,
    legacy_clipboard: Option<Arc<dyn Clipboard>>,
    share_sheet: Option<Arc<dyn ShareSheet>>,
    window_opener: Option<Arc<dyn WindowOpener>>,
    share_config: Option<ShareConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interest_repo(mut self, repo: Arc<dyn InterestRepository>) -> Self {
        self.interest_repo = Some(repo);
        self
    }

    pub fn share_log(mut self, log: ShareEventLog) -> Self {
        self.share_log = Some(log);
        self
    }

    pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn legacy_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.legacy_clipboard = Some(clipboard);
        self
    }

    pub fn share_sheet(mut self, sheet: Arc<dyn ShareSheet>) -> Self {
        self.share_sheet = Some(sheet);
        self
    }

    pub fn window_opener(mut self, opener: Arc<dyn WindowOpener>) -> Self {
        self.window_opener = Some(opener);
        self
    }

    pub fn share_config(mut self, config: ShareConfig) -> Self {
        self.share_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// A fresh share log and default share settings are used when none were given.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the interest repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let interest_repo = self
            .interest_repo
            .ok_or_else(|| ServiceError::validation("interest_repo is required"))?;

        Ok(ServiceContext {
            interest_repo,
            share_log: self.share_log.unwrap_or_default(),
            clipboard: self.clipboard,
            legacy_clipboard: self.legacy_clipboard,
            share_sheet: self.share_sheet,
            window_opener: self.window_opener,
            share_config: self.share_config.unwrap_or_default(),
        })
    }
}
