//! Host capability errors (clipboard, native share sheet, popup windows)

use thiserror::Error;

/// Failure of a host capability.
///
/// None of these are fatal: callers fold them into a `false` result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    /// The host does not provide this capability
    #[error("capability not supported")]
    Unsupported,

    /// The user dismissed the native UI
    #[error("cancelled by user")]
    Cancelled,

    /// The capability exists but the call failed
    #[error("capability failed: {0}")]
    Failed(String),
}

impl CapabilityError {
    /// Create a failure with a message
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}
