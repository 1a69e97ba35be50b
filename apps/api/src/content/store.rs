//! Content store: pluggable trait carried in `AppState` as
//! `Arc<dyn ContentStore>`. The default backend keeps everything in memory.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::content::models::StoredContent;
use crate::errors::AppError;
use crate::parser::Platform;

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn insert_many(&self, items: Vec<StoredContent>) -> Result<(), AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredContent>, AppError>;

    /// Items owned by `user_id` in insertion order, optionally limited to one
    /// platform. Items from one batch keep their order within the batch.
    async fn list_for_user(
        &self,
        user_id: &str,
        platform: Option<&Platform>,
    ) -> Result<Vec<StoredContent>, AppError>;
}

#[derive(Default)]
pub struct InMemoryContentStore {
    inner: RwLock<Entries>,
}

#[derive(Default)]
struct Entries {
    next_seq: u64,
    /// Each item with the sequence number it was inserted under.
    by_id: HashMap<Uuid, (u64, StoredContent)>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn insert_many(&self, items: Vec<StoredContent>) -> Result<(), AppError> {
        let mut entries = self.inner.write().await;
        for item in items {
            let seq = entries.next_seq;
            entries.next_seq += 1;
            entries.by_id.insert(item.id, (seq, item));
        }
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredContent>, AppError> {
        let entries = self.inner.read().await;
        Ok(entries.by_id.get(&id).map(|(_, item)| item.clone()))
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        platform: Option<&Platform>,
    ) -> Result<Vec<StoredContent>, AppError> {
        let entries = self.inner.read().await;
        let mut items: Vec<(u64, StoredContent)> = entries
            .by_id
            .values()
            .filter(|(_, item)| item.user_id == user_id)
            .filter(|(_, item)| platform.map_or(true, |p| &item.platform == p))
            .cloned()
            .collect();
        drop(entries);

        items.sort_by_key(|(seq, _)| *seq);
        Ok(items.into_iter().map(|(_, item)| item).collect())
    }
}
