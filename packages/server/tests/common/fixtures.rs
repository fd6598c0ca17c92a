//! Test fixtures for creating test data.
//!
//! These fixtures use the model and action methods directly to create test
//! data, bypassing the HTTP layer.

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use server_core::domains::event::models::event::Event;
use server_core::domains::event_type::models::event_type::EventType;
use server_core::domains::member::actions as member_actions;

/// Create an event type, returning its generated id
pub async fn create_event_type(pool: &PgPool, description: &str) -> Result<i64> {
    let event_type = EventType::insert(description, pool).await?;
    Ok(event_type.id)
}

/// Create an event under the given type, returning its generated id
pub async fn create_event(pool: &PgPool, type_id: i64, description: &str) -> Result<i64> {
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    let event = Event::insert(type_id, description, date, pool).await?;
    Ok(event.id)
}

/// Create a member with the given preference set, returning its generated id
pub async fn create_member(pool: &PgPool, name: &str, preferences: &[i64]) -> Result<i64> {
    let member =
        member_actions::create_member(Some(name.to_string()), preferences.to_vec(), pool).await?;
    Ok(member.id)
}
