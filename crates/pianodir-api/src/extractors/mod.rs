//! Axum extractors for request handling
//!
//! Custom extractors for caller identity, body validation and query parsing.

mod identity;
mod query;
mod validated;

pub use identity::{CurrentUser, OptionalCurrentUser, USER_ID_HEADER};
pub use query::ApiQuery;
pub use validated::ValidatedJson;
