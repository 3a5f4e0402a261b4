//! Caller identity extractor
//!
//! The upstream session provider authenticates users and forwards the user id
//! in the `X-User-Id` header.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::response::ApiError;

/// Header carrying the authenticated user id
pub const USER_ID_HEADER: &str = "x-user-id";

const MAX_USER_ID_LEN: usize = 128;

/// Authenticated caller
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: String,
}

impl CurrentUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Read the user id header. `Ok(None)` when absent or blank.
fn user_id_from_parts(parts: &Parts) -> Result<Option<String>, ApiError> {
    let Some(value) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };

    let user_id = value
        .to_str()
        .map_err(|_| ApiError::InvalidIdentity)?
        .trim();

    if user_id.is_empty() {
        return Ok(None);
    }
    if user_id.len() > MAX_USER_ID_LEN {
        return Err(ApiError::InvalidIdentity);
    }

    Ok(Some(user_id.to_string()))
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_id_from_parts(parts)?
            .map(CurrentUser::new)
            .ok_or(ApiError::MissingIdentity)
    }
}

/// Optional caller
///
/// Returns None if no identity header is present,
/// or an error if the header is malformed.
#[derive(Debug, Clone)]
pub struct OptionalCurrentUser(pub Option<CurrentUser>);

impl OptionalCurrentUser {
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_ref().map(|user| user.user_id.as_str())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalCurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalCurrentUser(
            user_id_from_parts(parts)?.map(CurrentUser::new),
        ))
    }
}
