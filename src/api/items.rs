use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::validation::parse_item_id;
use crate::core::state::AppState;
use crate::models::Item;


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:item_id", get(get_item).put(update_item).delete(delete_item))
}

async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items().list_all())
}

async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&item_id)?;
    let item = state.items().get_by_id(id)?;

    Ok(Json(item))
}

async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(item) = payload?;

    let item = state.items().create(item).inspect_err(|err| {
        tracing::info!(error = %err, action = "item_create", "Item create rejected");
    })?;

    tracing::info!(item_id = item.id, action = "item_create", "Item created");

    Ok((StatusCode::CREATED, Json(item)))
}

// The path id is checked before the body so a bad id always answers 400.
async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let id = parse_item_id(&item_id)?;
    let Json(replacement) = payload?;

    if replacement.id != id {
        tracing::debug!(item_id = id, body_id = replacement.id, "Body id overridden by path id");
    }

    let item = state.items().update(id, replacement)?;
    tracing::info!(item_id = item.id, action = "item_update", "Item updated");

    Ok(Json(item))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_item_id(&item_id)?;
    state.items().delete(id)?;

    tracing::info!(item_id = id, action = "item_delete", "Item deleted");

    Ok(StatusCode::NO_CONTENT)
}
