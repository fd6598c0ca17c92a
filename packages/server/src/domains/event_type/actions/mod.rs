//! Event type queries and mutations
//!
//! Mutations own the input validation and the referential-integrity guard:
//! a type referenced by at least one event cannot be deleted.

use sqlx::PgPool;
use tracing::info;

use crate::common::ApiError;
use crate::domains::event_type::data::EventTypeData;
use crate::domains::event_type::models::event_type::EventType;

/// List all event types
pub async fn list_event_types(pool: &PgPool) -> Result<Vec<EventTypeData>, ApiError> {
    let types = EventType::find_all(pool).await?;
    Ok(types.into_iter().map(EventTypeData::from).collect())
}

/// Get a single event type by id
pub async fn get_event_type(id: i64, pool: &PgPool) -> Result<EventTypeData, ApiError> {
    EventType::find_by_id(id, pool)
        .await?
        .map(EventTypeData::from)
        .ok_or_else(|| ApiError::not_found("Event type", id))
}

/// Create a new event type
pub async fn create_event_type(
    description: Option<String>,
    pool: &PgPool,
) -> Result<EventTypeData, ApiError> {
    let description = require_description(description)?;

    let created = EventType::insert(&description, pool).await?;
    info!(id = created.id, "Event type created");

    Ok(EventTypeData::from(created))
}

/// Update an event type's description
pub async fn update_event_type(
    id: i64,
    description: Option<String>,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let description = require_description(description)?;

    if !EventType::update(id, &description, pool).await? {
        return Err(ApiError::not_found("Event type", id));
    }

    info!(id, "Event type updated");
    Ok(())
}

/// Delete an event type, unless an event still references it
pub async fn delete_event_type(id: i64, pool: &PgPool) -> Result<(), ApiError> {
    if !EventType::exists(id, pool).await? {
        return Err(ApiError::not_found("Event type", id));
    }

    if EventType::is_referenced(id, pool).await? {
        return Err(ApiError::conflict(format!(
            "Event type {} is in use by one or more events",
            id
        )));
    }

    EventType::delete(id, pool).await?;
    info!(id, "Event type deleted");
    Ok(())
}

fn require_description(description: Option<String>) -> Result<String, ApiError> {
    match description {
        Some(description) if !description.trim().is_empty() => Ok(description),
        _ => Err(ApiError::invalid_input("description is required")),
    }
}
