//! REST handlers for /events

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::event::actions;
use crate::domains::event::data::{EventData, EventWithTypeData};
use crate::server::app::AppState;

/// Request body for create and update. Fields are optional so missing
/// input surfaces as a 400 with a message instead of a serde 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub type_id: Option<i64>,
    pub description: Option<String>,
    /// Calendar date, wire format YYYY-MM-DD
    pub date: Option<String>,
}

pub async fn list_events(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<EventWithTypeData>>, ApiError> {
    let events = actions::list_events(&state.db_pool).await?;
    Ok(Json(events))
}

pub async fn get_event(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EventData>, ApiError> {
    let event = actions::get_event(id, &state.db_pool).await?;
    Ok(Json(event))
}

pub async fn create_event(
    Extension(state): Extension<AppState>,
    Json(payload): Json<EventPayload>,
) -> Result<(StatusCode, Json<EventData>), ApiError> {
    let created = actions::create_event(
        payload.type_id,
        payload.description,
        payload.date,
        &state.db_pool,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_event(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EventPayload>,
) -> Result<Json<Value>, ApiError> {
    actions::update_event(
        id,
        payload.type_id,
        payload.description,
        payload.date,
        &state.db_pool,
    )
    .await?;
    Ok(Json(json!({ "message": "Event updated" })))
}

pub async fn delete_event(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    actions::delete_event(id, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Event deleted" })))
}
