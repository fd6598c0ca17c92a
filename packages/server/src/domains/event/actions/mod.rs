//! Event queries and mutations
//!
//! Creating or updating an event checks that `type_id` resolves to an
//! existing event type; deletion is blocked while any member is registered.

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;

use crate::common::ApiError;
use crate::domains::event::data::{EventData, EventWithTypeData};
use crate::domains::event::models::event::Event;
use crate::domains::event_type::models::event_type::EventType;
use crate::domains::member::models::associations;

/// List all events with their type description joined in
pub async fn list_events(pool: &PgPool) -> Result<Vec<EventWithTypeData>, ApiError> {
    let events = Event::find_all_with_type(pool).await?;
    Ok(events.into_iter().map(EventWithTypeData::from).collect())
}

/// Get a single event (raw row) by id
pub async fn get_event(id: i64, pool: &PgPool) -> Result<EventData, ApiError> {
    Event::find_by_id(id, pool)
        .await?
        .map(EventData::from)
        .ok_or_else(|| ApiError::not_found("Event", id))
}

/// Create a new event referencing an existing type
pub async fn create_event(
    type_id: Option<i64>,
    description: Option<String>,
    date: Option<String>,
    pool: &PgPool,
) -> Result<EventData, ApiError> {
    let (type_id, description, date) = validate_fields(type_id, description, date)?;

    if !EventType::exists(type_id, pool).await? {
        return Err(ApiError::not_found("Event type", type_id));
    }

    let created = Event::insert(type_id, &description, date, pool).await?;
    info!(id = created.id, type_id, "Event created");

    Ok(EventData::from(created))
}

/// Update an event's type, description, and date
pub async fn update_event(
    id: i64,
    type_id: Option<i64>,
    description: Option<String>,
    date: Option<String>,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let (type_id, description, date) = validate_fields(type_id, description, date)?;

    if !EventType::exists(type_id, pool).await? {
        return Err(ApiError::not_found("Event type", type_id));
    }

    if !Event::update(id, type_id, &description, date, pool).await? {
        return Err(ApiError::not_found("Event", id));
    }

    info!(id, "Event updated");
    Ok(())
}

/// Delete an event, unless a member is still registered to it
pub async fn delete_event(id: i64, pool: &PgPool) -> Result<(), ApiError> {
    if !Event::exists(id, pool).await? {
        return Err(ApiError::not_found("Event", id));
    }

    if associations::is_event_referenced(id, pool).await? {
        return Err(ApiError::conflict(format!(
            "Event {} has registered members",
            id
        )));
    }

    Event::delete(id, pool).await?;
    info!(id, "Event deleted");
    Ok(())
}

/// Check field presence and parse the calendar date (YYYY-MM-DD)
fn validate_fields(
    type_id: Option<i64>,
    description: Option<String>,
    date: Option<String>,
) -> Result<(i64, String, NaiveDate), ApiError> {
    let type_id = type_id.ok_or_else(|| ApiError::invalid_input("typeId is required"))?;

    let description = match description {
        Some(description) if !description.trim().is_empty() => description,
        _ => return Err(ApiError::invalid_input("description is required")),
    };

    let date = date.ok_or_else(|| ApiError::invalid_input("date is required"))?;
    let date = date
        .parse::<NaiveDate>()
        .map_err(|_| ApiError::invalid_input("date must be a valid YYYY-MM-DD date"))?;

    Ok((type_id, description, date))
}
