//! In-memory record store for scenario tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Mutex;
use uuid::Uuid;
use voxpop_client::{ApiError, FeedbackApi};
use voxpop_types::{FeedbackDraft, FeedbackRecord};

/// Stand-in for the remote record store.
///
/// Behaves like the real backend for list/create/remove and lets tests
/// script one-shot transport failures per operation.
pub struct MemoryApi {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    records: Vec<FeedbackRecord>,
    list_failures: VecDeque<(u16, Option<String>)>,
    create_failures: VecDeque<(u16, Option<String>)>,
    remove_failures: VecDeque<(u16, Option<String>)>,
    list_calls: usize,
}

impl Default for MemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryApi {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Start with a pre-populated backing store.
    pub fn seeded(records: Vec<FeedbackRecord>) -> Self {
        let api = Self::new();
        api.lock().records = records;
        api
    }

    /// Queue a transport failure for the next `list` call.
    pub fn fail_next_list(&self, status: u16, body: &str) {
        self.lock()
            .list_failures
            .push_back((status, Some(body.to_string())));
    }

    /// Queue a transport failure for the next `create` call.
    pub fn fail_next_create(&self, status: u16, body: &str) {
        self.lock()
            .create_failures
            .push_back((status, Some(body.to_string())));
    }

    /// Queue a transport failure for the next `remove` call.
    pub fn fail_next_remove(&self, status: u16, body: &str) {
        self.lock()
            .remove_failures
            .push_back((status, Some(body.to_string())));
    }

    /// Number of `list` calls served so far, failed ones included.
    pub fn list_calls(&self) -> usize {
        self.lock().list_calls
    }

    /// Snapshot of the backing store.
    pub fn records(&self) -> Vec<FeedbackRecord> {
        self.lock().records.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("MemoryApi lock poisoned")
    }
}

#[async_trait]
impl FeedbackApi for MemoryApi {
    async fn list(&self) -> Result<Vec<FeedbackRecord>, ApiError> {
        let mut inner = self.lock();
        inner.list_calls += 1;
        if let Some((status, body)) = inner.list_failures.pop_front() {
            return Err(ApiError::Transport { status, body });
        }
        Ok(inner.records.clone())
    }

    async fn create(&self, draft: &FeedbackDraft) -> Result<FeedbackRecord, ApiError> {
        let mut inner = self.lock();
        if let Some((status, body)) = inner.create_failures.pop_front() {
            return Err(ApiError::Transport { status, body });
        }
        let record = FeedbackRecord {
            id: Uuid::new_v4().to_string(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            category: draft.category.clone(),
            rating: Some(draft.rating),
            message: draft.message.clone(),
            created_at: Utc::now(),
        };
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let mut inner = self.lock();
        if let Some((status, body)) = inner.remove_failures.pop_front() {
            return Err(ApiError::Transport { status, body });
        }
        let before = inner.records.len();
        inner.records.retain(|record| record.id != id);
        if inner.records.len() == before {
            // Same contract as the real backend: unknown ids are an error.
            return Err(ApiError::Transport {
                status: 404,
                body: Some("record not found".to_string()),
            });
        }
        Ok(())
    }
}
