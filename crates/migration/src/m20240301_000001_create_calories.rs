//! Create `calories` table.
//!
//! One row per calorie entry. Column names match the JSON wire names so the
//! persisted layout mirrors what clients see.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Calories::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Calories::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Calories::Dish).text().not_null())
                    .col(ColumnDef::new(Calories::Size).integer().null())
                    .col(ColumnDef::new(Calories::Ingredients).text().null())
                    .col(ColumnDef::new(Calories::Proteins).integer().null())
                    .col(ColumnDef::new(Calories::Carbs).integer().null())
                    .col(ColumnDef::new(Calories::Fat).integer().null())
                    .col(ColumnDef::new(Calories::Calories).integer().null())
                    .col(ColumnDef::new(Calories::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Calories::UpdatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Calories::SoftDeletedAt).timestamp_with_time_zone().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Calories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Calories {
    Table,
    #[sea_orm(iden = "_id")]
    Id,
    Dish,
    Size,
    Ingredients,
    Proteins,
    Carbs,
    Fat,
    Calories,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
    #[sea_orm(iden = "updatedAt")]
    UpdatedAt,
    #[sea_orm(iden = "softDeletedAt")]
    SoftDeletedAt,
}
