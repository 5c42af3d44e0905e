use std::sync::Arc;

use models::entry;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{self, parse_entry_id, EntryUpdate, GuardedChange, IngredientsUpdate, NewEntry};
use super::repository::EntryRepository;
use crate::errors::ServiceError;

/// Entry business service independent of web framework.
///
/// A `None` result means no matching live entry; it is an expected outcome,
/// not an error.
#[derive(Clone)]
pub struct EntryService {
    repo: Arc<dyn EntryRepository>,
}

impl EntryService {
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<entry::Model>, ServiceError> {
        let all = self.repo.list().await?;
        debug!(count = all.len(), "entries listed");
        Ok(all)
    }

    /// Create an entry with server-stamped timestamps.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::entry::{domain::NewEntry, repo::MemoryEntryRepository, EntryService};
    /// let svc = EntryService::new(Arc::new(MemoryEntryRepository::new()));
    /// let input = NewEntry { dish: "Salad".into(), calories: Some(150), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.created_at, created.updated_at);
    /// assert!(created.soft_deleted_at.is_none());
    /// ```
    #[instrument(skip(self, input), fields(dish = %input.dish))]
    pub async fn create(&self, input: NewEntry) -> Result<entry::Model, ServiceError> {
        entry::validate_dish(&input.dish)?;
        let model = input.into_model(Uuid::new_v4(), domain::now());
        let created = self.repo.insert(model).await?;
        info!(id = %created.id, "entry_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Option<entry::Model>, ServiceError> {
        let id = parse_entry_id(id)?;
        self.repo.find(id).await
    }

    /// Set `ingredients` on a live entry and refresh `updated_at`.
    #[instrument(skip(self, input))]
    pub async fn update_ingredients(&self, id: &str, input: IngredientsUpdate) -> Result<Option<entry::Model>, ServiceError> {
        let id = parse_entry_id(id)?;
        let change = GuardedChange::Ingredients { ingredients: input.ingredients, updated_at: domain::now() };
        self.repo.update_active(id, change).await
    }

    /// Replace dish, ingredients, fat and calories on a live entry.
    #[instrument(skip(self, input))]
    pub async fn update_entry(&self, id: &str, input: EntryUpdate) -> Result<Option<entry::Model>, ServiceError> {
        let id = parse_entry_id(id)?;
        entry::validate_dish(&input.dish)?;
        let change = GuardedChange::Replace {
            dish: input.dish,
            ingredients: input.ingredients,
            fat: input.fat,
            calories: input.calories,
            updated_at: domain::now(),
        };
        self.repo.update_active(id, change).await
    }

    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: &str) -> Result<Option<entry::Model>, ServiceError> {
        let id = parse_entry_id(id)?;
        let res = self.repo.update_active(id, GuardedChange::SoftDelete { at: domain::now() }).await?;
        if res.is_some() {
            info!(%id, "entry_soft_deleted");
        }
        Ok(res)
    }

    /// Remove the entry whatever its soft-delete state.
    #[instrument(skip(self))]
    pub async fn hard_delete(&self, id: &str) -> Result<Option<entry::Model>, ServiceError> {
        let id = parse_entry_id(id)?;
        let res = self.repo.delete(id).await?;
        if res.is_some() {
            info!(%id, "entry_deleted");
        }
        Ok(res)
    }
}
