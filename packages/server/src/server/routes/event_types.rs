//! REST handlers for /eventtypes

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::event_type::actions;
use crate::domains::event_type::data::EventTypeData;
use crate::server::app::AppState;

/// Request body for create and update. `description` is optional so a
/// missing field surfaces as a 400 with a message instead of a serde 422.
#[derive(Debug, Deserialize)]
pub struct EventTypePayload {
    pub description: Option<String>,
}

pub async fn list_event_types(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<EventTypeData>>, ApiError> {
    let types = actions::list_event_types(&state.db_pool).await?;
    Ok(Json(types))
}

pub async fn get_event_type(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EventTypeData>, ApiError> {
    let event_type = actions::get_event_type(id, &state.db_pool).await?;
    Ok(Json(event_type))
}

pub async fn create_event_type(
    Extension(state): Extension<AppState>,
    Json(payload): Json<EventTypePayload>,
) -> Result<(StatusCode, Json<EventTypeData>), ApiError> {
    let created = actions::create_event_type(payload.description, &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_event_type(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EventTypePayload>,
) -> Result<Json<Value>, ApiError> {
    actions::update_event_type(id, payload.description, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Event type updated" })))
}

pub async fn delete_event_type(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    actions::delete_event_type(id, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Event type deleted" })))
}
