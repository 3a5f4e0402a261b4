//! Domain entities - core business objects

mod interest;
mod share_event;
mod share_stats;

pub use interest::InterestRecord;
pub use share_event::{ShareEvent, ShareFilter};
pub use share_stats::{PlatformCount, ShareStats, DEFAULT_RECENT_WINDOW_DAYS};
