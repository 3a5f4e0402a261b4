//! Host capabilities used when sharing
//!
//! A browser, desktop shell or mobile host provides these. Every call may
//! fail with a [`CapabilityError`]; callers treat failure as "did not share".

use async_trait::async_trait;

use crate::error::CapabilityError;
use crate::value_objects::{PopupFeatures, ShareData};

/// System clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), CapabilityError>;
}

/// Native share sheet of the host platform
#[async_trait]
pub trait ShareSheet: Send + Sync {
    /// Present the share sheet.
    ///
    /// Returns [`CapabilityError::Cancelled`] when the user dismisses it.
    async fn share(&self, data: &ShareData) -> Result<(), CapabilityError>;
}

/// Opens share links in a new window
pub trait WindowOpener: Send + Sync {
    fn open(&self, url: &str, features: PopupFeatures) -> Result<(), CapabilityError>;
}
