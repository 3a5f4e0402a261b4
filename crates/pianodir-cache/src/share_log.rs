//! Share event log
//!
//! Ordered, append-only list of share events. Handles are cheap to clone and
//! all clones see the same log; each `ShareEventLog::new()` is an independent log.

use std::sync::Arc;

use parking_lot::RwLock;
use pianodir_core::ShareEvent;

/// Append-only, insertion-ordered share event log
#[derive(Debug, Clone, Default)]
pub struct ShareEventLog {
    events: Arc<RwLock<Vec<ShareEvent>>>,
}

impl ShareEventLog {
    /// Create a new, empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event at the end of the log
    pub fn append(&self, event: ShareEvent) {
        self.events.write().push(event);
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Run `f` over the events in insertion order while holding the read lock
    pub fn with_events<R>(&self, f: impl FnOnce(&[ShareEvent]) -> R) -> R {
        f(&self.events.read())
    }

    /// Copy of every event in insertion order
    pub fn snapshot(&self) -> Vec<ShareEvent> {
        self.with_events(|events| events.to_vec())
    }
}
