use async_trait::async_trait;
use models::entry;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::entry::domain::GuardedChange;
use crate::entry::repository::EntryRepository;
use crate::errors::ServiceError;

/// In-process repository keeping entries in insertion order.
///
/// A guarded change checks `soft_deleted_at` and writes under the same write
/// lock, giving the same single-entry atomicity as the SQL implementation.
/// Backs the service and HTTP tests.
#[derive(Default)]
pub struct MemoryEntryRepository {
    entries: RwLock<Vec<entry::Model>>,
}

impl MemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl EntryRepository for MemoryEntryRepository {
    async fn list(&self) -> Result<Vec<entry::Model>, ServiceError> {
        Ok(self.entries.read().await.clone())
    }

    async fn insert(&self, entry: entry::Model) -> Result<entry::Model, ServiceError> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|e| e.id == entry.id) {
            return Err(ServiceError::Db(format!("duplicate key _id {}", entry.id)));
        }
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn find(&self, id: Uuid) -> Result<Option<entry::Model>, ServiceError> {
        let entries = self.entries.read().await;
        Ok(entries.iter().find(|e| e.id == id).cloned())
    }

    async fn update_active(&self, id: Uuid, change: GuardedChange) -> Result<Option<entry::Model>, ServiceError> {
        let mut entries = self.entries.write().await;
        let Some(found) = entries.iter_mut().find(|e| e.id == id && e.is_active()) else {
            return Ok(None);
        };
        change.apply_to(found);
        Ok(Some(found.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<entry::Model>, ServiceError> {
        let mut entries = self.entries.write().await;
        let pos = entries.iter().position(|e| e.id == id);
        Ok(pos.map(|i| entries.remove(i)))
    }
}
