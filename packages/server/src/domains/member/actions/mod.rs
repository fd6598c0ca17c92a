//! Member queries and mutations
//!
//! Create and update replace the whole preference set and run inside a
//! single transaction, so a failed insert rolls the name change back too.
//! Registration add/remove are point operations on the association store.

use sqlx::PgPool;
use tracing::info;

use crate::common::ApiError;
use crate::domains::event::models::event::Event;
use crate::domains::event_type::models::event_type::EventType;
use crate::domains::member::data::MemberData;
use crate::domains::member::models::{associations, member::Member};

/// List all members with their preference and registration id sets
pub async fn list_members(pool: &PgPool) -> Result<Vec<MemberData>, ApiError> {
    let members = Member::find_all(pool).await?;

    let mut aggregates = Vec::with_capacity(members.len());
    for member in members {
        let preferences = associations::preference_ids_of(member.id, pool).await?;
        let registrations = associations::registration_ids_of(member.id, pool).await?;
        aggregates.push(MemberData::new(member, preferences, registrations));
    }

    Ok(aggregates)
}

/// Get a single member aggregate by id
pub async fn get_member(id: i64, pool: &PgPool) -> Result<MemberData, ApiError> {
    let member = Member::find_by_id(id, pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Member", id))?;

    let preferences = associations::preference_ids_of(id, pool).await?;
    let registrations = associations::registration_ids_of(id, pool).await?;

    Ok(MemberData::new(member, preferences, registrations))
}

/// Create a member together with its initial preference set
pub async fn create_member(
    name: Option<String>,
    preferred_event_type_ids: Vec<i64>,
    pool: &PgPool,
) -> Result<MemberData, ApiError> {
    let name = require_name(name)?;
    validate_event_types(&preferred_event_type_ids, pool).await?;

    let mut tx = pool.begin().await?;
    let member = Member::insert(&name, &mut tx).await?;
    associations::replace_preferences(member.id, &preferred_event_type_ids, &mut tx).await?;
    tx.commit().await?;

    info!(id = member.id, "Member created");
    get_member(member.id, pool).await
}

/// Replace a member's name and preference set
pub async fn update_member(
    id: i64,
    name: Option<String>,
    preferred_event_type_ids: Vec<i64>,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let name = require_name(name)?;
    validate_event_types(&preferred_event_type_ids, pool).await?;

    let mut tx = pool.begin().await?;
    if !Member::update_name(id, &name, &mut tx).await? {
        return Err(ApiError::not_found("Member", id));
    }
    associations::replace_preferences(id, &preferred_event_type_ids, &mut tx).await?;
    tx.commit().await?;

    info!(id, "Member updated");
    Ok(())
}

/// Delete a member; its preference and registration rows cascade with it
pub async fn delete_member(id: i64, pool: &PgPool) -> Result<(), ApiError> {
    if !Member::delete(id, pool).await? {
        return Err(ApiError::not_found("Member", id));
    }

    info!(id, "Member deleted");
    Ok(())
}

/// Register a member to an event. A duplicate registration is a conflict.
pub async fn register_member_to_event(
    member_id: i64,
    event_id: i64,
    pool: &PgPool,
) -> Result<(), ApiError> {
    if !Member::exists(member_id, pool).await? {
        return Err(ApiError::not_found("Member", member_id));
    }
    if !Event::exists(event_id, pool).await? {
        return Err(ApiError::not_found("Event", event_id));
    }
    if associations::registration_exists(member_id, event_id, pool).await? {
        return Err(ApiError::conflict(format!(
            "Member {} is already registered to event {}",
            member_id, event_id
        )));
    }

    associations::register(member_id, event_id, pool).await?;
    info!(member_id, event_id, "Member registered to event");
    Ok(())
}

/// Remove a member's registration. Removing an absent pair succeeds.
pub async fn unregister_member_from_event(
    member_id: i64,
    event_id: i64,
    pool: &PgPool,
) -> Result<(), ApiError> {
    if !Member::exists(member_id, pool).await? {
        return Err(ApiError::not_found("Member", member_id));
    }
    if !Event::exists(event_id, pool).await? {
        return Err(ApiError::not_found("Event", event_id));
    }

    associations::unregister(member_id, event_id, pool).await?;
    info!(member_id, event_id, "Member unregistered from event");
    Ok(())
}

/// Every preferred event type id must resolve before the write starts
async fn validate_event_types(event_type_ids: &[i64], pool: &PgPool) -> Result<(), ApiError> {
    for &event_type_id in event_type_ids {
        if !EventType::exists(event_type_id, pool).await? {
            return Err(ApiError::not_found("Event type", event_type_id));
        }
    }
    Ok(())
}

fn require_name(name: Option<String>) -> Result<String, ApiError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ApiError::invalid_input("name is required")),
    }
}
