//! # pianodir-cache
//!
//! In-process stores.
//!
//! ## Features
//!
//! - **Share event log**: ordered, append-only record of share actions
//!   for the lifetime of the process
//! - **Interest store**: `InterestRepository` kept in memory, used by the
//!   `memory` storage backend and by tests
//!
//! ## Example
//!
//! ```ignore
//! use pianodir_cache::{MemoryInterestRepository, ShareEventLog};
//!
//! let log = ShareEventLog::new();
//! log.append(ShareEvent::new(SharePlatform::Email, ContentType::Piano, "p1", None));
//! assert_eq!(log.len(), 1);
//!
//! let interests = MemoryInterestRepository::new_shared();
//! ```

pub mod interest;
pub mod share_log;

pub use interest::MemoryInterestRepository;
pub use share_log::ShareEventLog;
