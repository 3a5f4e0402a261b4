//! # pianodir-core
//!
//! Domain layer for the piano directory's sharing and event interest features:
//! share events and their statistics, platform share links, interest records,
//! and the ports (traits) implemented by storage and host capabilities.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    InterestRecord, PlatformCount, ShareEvent, ShareFilter, ShareStats, DEFAULT_RECENT_WINDOW_DAYS,
};
pub use error::{CapabilityError, DomainError};
pub use traits::{Clipboard, InterestRepository, RepoResult, ShareSheet, WindowOpener};
pub use value_objects::{ContentType, PopupFeatures, ShareData, SharePlatform};
