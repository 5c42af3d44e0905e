use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use models::entry;
use serde::Deserialize;
use service::entry::domain::{EntryUpdate, IngredientsUpdate, NewEntry};
use tracing::{debug, info};

use crate::{errors::ApiError, state::ServerState};

/// `?id=<entry id>`
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: String,
}

type EntryResult = Result<Json<entry::Model>, ApiError>;

fn id_from(query: Result<Query<IdQuery>, QueryRejection>) -> Result<String, ApiError> {
    query
        .map(|Query(q)| q.id)
        .map_err(|e| ApiError::Rejected(e.body_text()))
}

fn body_from<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(v)| v)
        .map_err(|e| ApiError::Rejected(e.body_text()))
}

fn found(res: Option<entry::Model>) -> EntryResult {
    res.map(Json).ok_or(ApiError::NotFound)
}

/// GET /entries
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<entry::Model>>, ApiError> {
    let all = state.entries.list().await?;
    info!(count = all.len(), "list entries");
    Ok(Json(all))
}

/// POST /entry/add
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> EntryResult {
    let input = body_from(payload)?;
    let created = state.entries.create(input).await?;
    info!(id = %created.id, dish = %created.dish, "created entry");
    Ok(Json(created))
}

/// GET /entry/?id=
pub async fn get_by_id(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> EntryResult {
    let id = id_from(query)?;
    debug!(%id, "get entry");
    found(state.entries.get(&id).await?)
}

/// PUT /ingredient/update?id=
pub async fn update_ingredients(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<IngredientsUpdate>, JsonRejection>,
) -> EntryResult {
    let id = id_from(query)?;
    let input = body_from(payload)?;
    found(state.entries.update_ingredients(&id, input).await?)
}

/// PUT /entry/update?id=
pub async fn update_entry(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
    payload: Result<Json<EntryUpdate>, JsonRejection>,
) -> EntryResult {
    let id = id_from(query)?;
    let input = body_from(payload)?;
    let res = state.entries.update_entry(&id, input).await?;
    if let Some(m) = &res {
        info!(id = %m.id, "updated entry");
    }
    found(res)
}

/// DELETE /entry/softdelete/?id=
pub async fn soft_delete(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> EntryResult {
    let id = id_from(query)?;
    found(state.entries.soft_delete(&id).await?)
}

/// DELETE /entry/delete/?id=
pub async fn hard_delete(
    State(state): State<ServerState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> EntryResult {
    let id = id_from(query)?;
    found(state.entries.hard_delete(&id).await?)
}
