//! Business logic services
//!
//! Services borrow a [`ServiceContext`] for the duration of a call and hold no
//! state of their own.

pub mod context;
pub mod error;
pub mod interest;
pub mod share;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use interest::InterestService;
pub use share::ShareService;
