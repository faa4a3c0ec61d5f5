use async_trait::async_trait;
use voxpop_types::{FeedbackDraft, FeedbackRecord};

use crate::error::Result;

/// Object-safe contract for the remote record store.
///
/// The dashboard holds the store as `Arc<dyn FeedbackApi>`, so test
/// environments can substitute an in-memory implementation for the HTTP one.
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    /// Fetch every record.
    async fn list(&self) -> Result<Vec<FeedbackRecord>>;

    /// Submit a draft; the backend assigns `id` and `created_at`.
    async fn create(&self, draft: &FeedbackDraft) -> Result<FeedbackRecord>;

    /// Delete by id. Not idempotent: deleting an unknown id surfaces the
    /// backend's error.
    async fn remove(&self, id: &str) -> Result<()>;
}
