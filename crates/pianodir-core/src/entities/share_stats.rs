//! Share statistics - aggregate view over a sequence of share events

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::share_event::ShareEvent;
use crate::value_objects::SharePlatform;

/// Default trailing window for `recent_shares`
pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 7;

/// Share count for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformCount {
    pub platform: SharePlatform,
    pub count: u64,
}

/// Aggregated share statistics. Derived on every query, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShareStats {
    pub total_shares: u64,
    /// Shares inside the trailing window ending at query time
    pub recent_shares: u64,
    /// Per-platform counts, in the order platforms were first seen
    pub by_platform: Vec<PlatformCount>,
    /// Platform with the highest count; the first one seen wins a tie
    pub most_popular_platform: Option<SharePlatform>,
}

impl ShareStats {
    /// Aggregate events (already filtered) as of `now`.
    ///
    /// An event is recent when strictly newer than `now - recent_window`.
    /// A window reaching past the earliest representable instant counts
    /// every event as recent.
    pub fn compute<'a, I>(events: I, now: DateTime<Utc>, recent_window: Duration) -> Self
    where
        I: IntoIterator<Item = &'a ShareEvent>,
    {
        let cutoff = now.checked_sub_signed(recent_window);
        let mut stats = Self::default();

        for event in events {
            stats.total_shares += 1;
            if cutoff.map_or(true, |cutoff| event.timestamp > cutoff) {
                stats.recent_shares += 1;
            }

            match stats
                .by_platform
                .iter_mut()
                .find(|entry| entry.platform == event.platform)
            {
                Some(entry) => entry.count += 1,
                None => stats.by_platform.push(PlatformCount {
                    platform: event.platform,
                    count: 1,
                }),
            }
        }

        // Strictly greater replaces, so earlier platforms keep ties
        stats.most_popular_platform = stats
            .by_platform
            .iter()
            .fold(None::<&PlatformCount>, |best, entry| match best {
                Some(best) if best.count >= entry.count => Some(best),
                _ => Some(entry),
            })
            .map(|entry| entry.platform);

        stats
    }

    /// Share count for a platform, zero if never shared there
    pub fn count_for(&self, platform: SharePlatform) -> u64 {
        self.by_platform
            .iter()
            .find(|entry| entry.platform == platform)
            .map_or(0, |entry| entry.count)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_shares == 0
    }
}
