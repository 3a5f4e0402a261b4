//! Hand-written fakes of the core ports for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pianodir_cache::MemoryInterestRepository;
use pianodir_core::{
    CapabilityError, Clipboard, DomainError, InterestRecord, InterestRepository, PopupFeatures,
    RepoResult, ShareData, ShareSheet, WindowOpener,
};
use uuid::Uuid;

use super::context::{ServiceContext, ServiceContextBuilder};

fn unavailable() -> DomainError {
    DomainError::DatabaseError("connection refused".to_string())
}

/// Repository whose every call fails like a dropped connection
pub struct FailingRepository;

#[async_trait]
impl InterestRepository for FailingRepository {
    async fn find(&self, _user_id: &str, _event_id: &str) -> RepoResult<Option<InterestRecord>> {
        Err(unavailable())
    }

    async fn create(&self, _record: &InterestRecord) -> RepoResult<()> {
        Err(unavailable())
    }

    async fn set_interested(&self, _id: Uuid, _interested: bool) -> RepoResult<()> {
        Err(unavailable())
    }

    async fn count_interested(&self, _event_id: &str) -> RepoResult<i64> {
        Err(unavailable())
    }

    async fn ping(&self) -> RepoResult<()> {
        Err(unavailable())
    }
}

/// In-memory repository that counts round-trips
#[derive(Default)]
pub struct CountingRepository {
    inner: MemoryInterestRepository,
    calls: AtomicUsize,
}

impl CountingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl InterestRepository for CountingRepository {
    async fn find(&self, user_id: &str, event_id: &str) -> RepoResult<Option<InterestRecord>> {
        self.hit();
        self.inner.find(user_id, event_id).await
    }

    async fn create(&self, record: &InterestRecord) -> RepoResult<()> {
        self.hit();
        self.inner.create(record).await
    }

    async fn set_interested(&self, id: Uuid, interested: bool) -> RepoResult<()> {
        self.hit();
        self.inner.set_interested(id, interested).await
    }

    async fn count_interested(&self, event_id: &str) -> RepoResult<i64> {
        self.hit();
        self.inner.count_interested(event_id).await
    }
}

/// Clipboard returning a fixed outcome and remembering what it was given
pub struct ScriptedClipboard {
    outcome: Result<(), CapabilityError>,
    writes: Mutex<Vec<String>>,
}

impl ScriptedClipboard {
    pub fn new(outcome: Result<(), CapabilityError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            writes: Mutex::new(Vec::new()),
        })
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for ScriptedClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        self.writes.lock().unwrap().push(text.to_string());
        self.outcome.clone()
    }
}

/// Share sheet returning a fixed outcome
pub struct ScriptedShareSheet {
    outcome: Result<(), CapabilityError>,
    shared: Mutex<Vec<ShareData>>,
}

impl ScriptedShareSheet {
    pub fn new(outcome: Result<(), CapabilityError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            shared: Mutex::new(Vec::new()),
        })
    }

    pub fn shared(&self) -> Vec<ShareData> {
        self.shared.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShareSheet for ScriptedShareSheet {
    async fn share(&self, data: &ShareData) -> Result<(), CapabilityError> {
        self.shared.lock().unwrap().push(data.clone());
        self.outcome.clone()
    }
}

/// Window opener that records every url and popup size
pub struct RecordingOpener {
    outcome: Result<(), CapabilityError>,
    opened: Mutex<Vec<(String, PopupFeatures)>>,
}

impl RecordingOpener {
    pub fn new(outcome: Result<(), CapabilityError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            opened: Mutex::new(Vec::new()),
        })
    }

    pub fn opened(&self) -> Vec<(String, PopupFeatures)> {
        self.opened.lock().unwrap().clone()
    }
}

impl WindowOpener for RecordingOpener {
    fn open(&self, url: &str, features: PopupFeatures) -> Result<(), CapabilityError> {
        self.opened.lock().unwrap().push((url.to_string(), features));
        self.outcome.clone()
    }
}

/// Context over an empty in-memory store with no host capabilities
pub fn memory_context() -> ServiceContext {
    builder().build().unwrap()
}

/// Builder preloaded with an empty in-memory store
pub fn builder() -> ServiceContextBuilder {
    ServiceContextBuilder::new().interest_repo(MemoryInterestRepository::new_shared())
}
