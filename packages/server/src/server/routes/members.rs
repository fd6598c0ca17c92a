//! REST handlers for /members and the registration sub-resource

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::common::ApiError;
use crate::domains::member::actions;
use crate::domains::member::data::MemberData;
use crate::server::app::AppState;

/// Request body for create and update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPayload {
    pub name: Option<String>,
    #[serde(default)]
    pub preferred_event_type_ids: Vec<i64>,
}

/// Request body for POST /members/:id/events
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub event_id: Option<i64>,
}

pub async fn list_members(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<MemberData>>, ApiError> {
    let members = actions::list_members(&state.db_pool).await?;
    Ok(Json(members))
}

pub async fn get_member(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MemberData>, ApiError> {
    let member = actions::get_member(id, &state.db_pool).await?;
    Ok(Json(member))
}

pub async fn create_member(
    Extension(state): Extension<AppState>,
    Json(payload): Json<MemberPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = actions::create_member(
        payload.name,
        payload.preferred_event_type_ids,
        &state.db_pool,
    )
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Member created", "id": created.id })),
    ))
}

pub async fn update_member(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<MemberPayload>,
) -> Result<Json<Value>, ApiError> {
    actions::update_member(
        id,
        payload.name,
        payload.preferred_event_type_ids,
        &state.db_pool,
    )
    .await?;
    Ok(Json(json!({ "message": "Member updated" })))
}

pub async fn delete_member(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    actions::delete_member(id, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Member deleted" })))
}

pub async fn register_member(
    Extension(state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RegistrationPayload>,
) -> Result<Json<Value>, ApiError> {
    let event_id = payload
        .event_id
        .ok_or_else(|| ApiError::invalid_input("eventId is required"))?;

    actions::register_member_to_event(id, event_id, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Member registered to event" })))
}

pub async fn unregister_member(
    Extension(state): Extension<AppState>,
    Path((id, event_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    actions::unregister_member_from_event(id, event_id, &state.db_pool).await?;
    Ok(Json(json!({ "message": "Member unregistered from event" })))
}
