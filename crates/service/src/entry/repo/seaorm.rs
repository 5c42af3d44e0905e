use async_trait::async_trait;
use models::entry::{self, Entity as EntryEntity};
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entry::domain::GuardedChange;
use crate::entry::repository::EntryRepository;
use crate::errors::ServiceError;

/// Postgres-backed repository. `DatabaseConnection` is a pool and is shared
/// by every request.
#[derive(Clone)]
pub struct SeaOrmEntryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEntryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn guarded_active_model(id: Uuid, change: GuardedChange) -> entry::ActiveModel {
    let mut am = entry::ActiveModel { id: Set(id), ..Default::default() };
    match change {
        GuardedChange::Ingredients { ingredients, updated_at } => {
            am.ingredients = Set(ingredients);
            am.updated_at = Set(updated_at);
        }
        GuardedChange::Replace { dish, ingredients, fat, calories, updated_at } => {
            am.dish = Set(dish);
            am.ingredients = Set(ingredients);
            am.fat = Set(fat);
            am.calories = Set(calories);
            am.updated_at = Set(updated_at);
        }
        GuardedChange::SoftDelete { at } => {
            am.soft_deleted_at = Set(Some(at));
        }
    }
    am
}

#[async_trait]
impl EntryRepository for SeaOrmEntryRepository {
    async fn list(&self) -> Result<Vec<entry::Model>, ServiceError> {
        let rows = EntryEntity::find()
            .order_by_asc(entry::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, entry: entry::Model) -> Result<entry::Model, ServiceError> {
        let created = entry.into_active_model().insert(&self.db).await?;
        Ok(created)
    }

    async fn find(&self, id: Uuid) -> Result<Option<entry::Model>, ServiceError> {
        let found = EntryEntity::find_by_id(id).one(&self.db).await?;
        Ok(found)
    }

    async fn update_active(&self, id: Uuid, change: GuardedChange) -> Result<Option<entry::Model>, ServiceError> {
        // UPDATE calories SET .. WHERE "_id" = $1 AND "softDeletedAt" IS NULL RETURNING *
        let res = EntryEntity::update(guarded_active_model(id, change))
            .filter(entry::Column::SoftDeletedAt.is_null())
            .exec(&self.db)
            .await;
        match res {
            Ok(updated) => Ok(Some(updated)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<Option<entry::Model>, ServiceError> {
        let stmt = Query::delete()
            .from_table(EntryEntity)
            .and_where(entry::Column::Id.eq(id))
            .returning_all()
            .to_owned();
        let backend = self.db.get_database_backend();
        let deleted = EntryEntity::find()
            .from_raw_sql(backend.build(&stmt))
            .one(&self.db)
            .await?;
        Ok(deleted)
    }
}
