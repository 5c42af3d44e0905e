use async_trait::async_trait;
use models::entry;
use uuid::Uuid;

use super::domain::GuardedChange;
use crate::errors::ServiceError;

/// Persistence seam for entries. Every method is a single store round trip.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Every entry, soft-deleted ones included.
    async fn list(&self) -> Result<Vec<entry::Model>, ServiceError>;
    async fn insert(&self, entry: entry::Model) -> Result<entry::Model, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<entry::Model>, ServiceError>;
    /// Apply `change` only if the entry exists and `soft_deleted_at` is null.
    /// Returns the post-update entry, or `None` when the guard did not match.
    async fn update_active(&self, id: Uuid, change: GuardedChange) -> Result<Option<entry::Model>, ServiceError>;
    /// Remove regardless of soft-delete state; returns the removed snapshot.
    async fn delete(&self, id: Uuid) -> Result<Option<entry::Model>, ServiceError>;
}
