use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SubsecRound, Utc};
use models::entry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Create input. Mirrors the wire shape of an entry; `_id`, timestamps and
/// `softDeletedAt` sent by a client are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEntry {
    pub dish: String,
    pub size: Option<i32>,
    pub ingredients: Option<String>,
    pub proteins: Option<i32>,
    pub carbs: Option<i32>,
    pub fat: Option<i32>,
    pub calories: Option<i32>,
}

impl NewEntry {
    pub fn into_model(self, id: Uuid, now: DateTime<Utc>) -> entry::Model {
        entry::Model {
            id,
            dish: self.dish,
            size: self.size,
            ingredients: self.ingredients,
            proteins: self.proteins,
            carbs: self.carbs,
            fat: self.fat,
            calories: self.calories,
            created_at: now,
            updated_at: now,
            soft_deleted_at: None,
        }
    }
}

/// Body of `PUT /ingredient/update`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientsUpdate {
    pub ingredients: Option<String>,
}

/// Body of `PUT /entry/update`. Fields outside this set are never touched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryUpdate {
    pub dish: String,
    pub ingredients: Option<String>,
    pub fat: Option<i32>,
    pub calories: Option<i32>,
}

/// A mutation that only applies while the entry is not soft-deleted.
/// Repositories must check the guard and write in one atomic step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardedChange {
    Ingredients {
        ingredients: Option<String>,
        updated_at: DateTime<Utc>,
    },
    Replace {
        dish: String,
        ingredients: Option<String>,
        fat: Option<i32>,
        calories: Option<i32>,
        updated_at: DateTime<Utc>,
    },
    SoftDelete {
        at: DateTime<Utc>,
    },
}

impl GuardedChange {
    /// Apply to an in-memory model; the caller has already checked the guard.
    pub fn apply_to(self, m: &mut entry::Model) {
        match self {
            GuardedChange::Ingredients { ingredients, updated_at } => {
                m.ingredients = ingredients;
                m.updated_at = updated_at;
            }
            GuardedChange::Replace { dish, ingredients, fat, calories, updated_at } => {
                m.dish = dish;
                m.ingredients = ingredients;
                m.fat = fat;
                m.calories = calories;
                m.updated_at = updated_at;
            }
            GuardedChange::SoftDelete { at } => {
                m.soft_deleted_at = Some(at);
            }
        }
    }
}

pub fn parse_entry_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| ServiceError::InvalidId(format!("'{raw}' is not a valid entry id")))
}

static LAST_ISSUED_MICROS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Current time at the precision Postgres stores (microseconds), so values
/// read back from the table compare equal to the ones written.
///
/// Strictly increasing within this process: two calls in the same
/// microsecond, or a wall clock stepping backwards, still yield a later
/// value than the previous one. Across processes ordering relies on the
/// hosts' clocks.
pub fn now() -> DateTime<Utc> {
    let wall = Utc::now().timestamp_micros();
    let next = |last: i64| wall.max(last.saturating_add(1));
    let micros = match LAST_ISSUED_MICROS.fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(next(last))) {
        Ok(last) | Err(last) => next(last),
    };
    DateTime::<Utc>::from_timestamp_micros(micros).unwrap_or_else(|| Utc::now().trunc_subsecs(6))
}
