//! Calorie entry entity.
//!
//! Rows live in the `calories` table. Column names and JSON keys are the same
//! strings (see [`FIELD_MAP`]), so a stored row and the HTTP body have one
//! shape.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "calories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "_id")]
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub dish: String,
    pub size: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub ingredients: Option<String>,
    pub proteins: Option<i32>,
    pub carbs: Option<i32>,
    pub fat: Option<i32>,
    pub calories: Option<i32>,
    #[sea_orm(column_name = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: DateTimeUtc,
    #[sea_orm(column_name = "updatedAt")]
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTimeUtc,
    #[sea_orm(column_name = "softDeletedAt")]
    #[serde(rename = "softDeletedAt")]
    pub soft_deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rust field name to wire/column name, in declaration order.
pub const FIELD_MAP: [(&str, &str); 11] = [
    ("id", "_id"),
    ("dish", "dish"),
    ("size", "size"),
    ("ingredients", "ingredients"),
    ("proteins", "proteins"),
    ("carbs", "carbs"),
    ("fat", "fat"),
    ("calories", "calories"),
    ("created_at", "createdAt"),
    ("updated_at", "updatedAt"),
    ("soft_deleted_at", "softDeletedAt"),
];

impl Model {
    /// Active until soft-deleted.
    pub fn is_active(&self) -> bool {
        self.soft_deleted_at.is_none()
    }
}

pub fn validate_dish(dish: &str) -> Result<(), errors::ModelError> {
    if dish.trim().is_empty() {
        return Err(errors::ModelError::Validation("Dish must not be blank".into()));
    }
    Ok(())
}
