//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown share platform: {0}")]
    InvalidPlatform(String),

    #[error("Unknown content type: {0}")]
    InvalidContentType(String),

    #[error("Share link unavailable for platform: {0}")]
    NoShareLink(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPlatform(_) => "UNKNOWN_PLATFORM",
            Self::InvalidContentType(_) => "UNKNOWN_CONTENT_TYPE",
            Self::NoShareLink(_) => "NO_SHARE_LINK",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidPlatform(_)
                | Self::InvalidContentType(_)
                | Self::NoShareLink(_)
        )
    }

    /// Check if this error came from the storage layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}
