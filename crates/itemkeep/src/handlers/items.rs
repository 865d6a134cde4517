//! Item CRUD handlers.
//!
//! These handlers talk to the `ItemRepository` trait object in the state and
//! never know whether a cache sits in front of the storage backend.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use itemkeep_core::item::Item;

use crate::{
    handlers::{AppError, RequestError},
    state::AppState,
};

fn parse_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id).map_err(|e| {
        tracing::debug!(error = %e, "Rejected item id");
        RequestError::InvalidId.into()
    })
}

fn parse_item(payload: Result<Json<Item>, JsonRejection>) -> Result<Item, AppError> {
    let Json(item) = payload.map_err(|e| RequestError::InvalidBody(e.body_text()))?;
    item.validate()?;
    Ok(item)
}

/// List all items (GET /items).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.item_repo.list_items().await?;
    Ok(Json(items))
}

/// Get a single item (GET /items/{id}).
///
/// An unknown ID answers 200 with the zero item `{"id":0,"name":""}`.
pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Item>, AppError> {
    let id = parse_id(path)?;
    let item = state.item_repo.get_item(id).await?;
    if item.is_zero() {
        tracing::debug!(item_id = id, "No item with this id, answering the zero item");
    }
    Ok(Json(item))
}

/// Create an item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let item = parse_item(payload)?;
    state.item_repo.create_item(&item).await?;

    tracing::info!(item_id = item.id, name = %item.name, "Created item");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "created": { "id": item.id } })),
    ))
}

/// Update an item (PUT /items).
pub async fn update_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let item = parse_item(payload)?;
    state.item_repo.update_item(&item).await?;

    tracing::info!(item_id = item.id, name = %item.name, "Updated item");
    Ok(Json(json!({ "updated": { "id": item.id } })))
}

/// Delete an item (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(path)?;
    state.item_repo.delete_item(id).await?;

    tracing::info!(item_id = id, "Deleted item");
    Ok(Json(json!({ "deleted": { "id": id } })))
}
