//! Association store for the two many-to-many relations:
//! member ↔ preferred event type and member ↔ registered event.
//!
//! Both join tables carry a composite primary key, so duplicate pairs are
//! impossible at the storage level; the operations here keep the API-level
//! semantics (full replacement for preferences, point add/remove for
//! registrations) on top of that.

use std::collections::BTreeSet;

use sqlx::{PgPool, Postgres, Transaction};

/// Replace a member's entire preference set inside the caller's transaction:
/// delete every existing pair, insert one pair per distinct input id.
/// Duplicates in the input collapse; the empty set is valid.
pub async fn replace_preferences(
    member_id: i64,
    event_type_ids: &[i64],
    tx: &mut Transaction<'_, Postgres>,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM member_preferences WHERE member_id = $1")
        .bind(member_id)
        .execute(&mut **tx)
        .await?;

    let distinct: BTreeSet<i64> = event_type_ids.iter().copied().collect();
    for event_type_id in distinct {
        sqlx::query(
            "INSERT INTO member_preferences (member_id, event_type_id) VALUES ($1, $2)",
        )
        .bind(member_id)
        .bind(event_type_id)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

/// Current set of preferred event type ids for a member
pub async fn preference_ids_of(member_id: i64, pool: &PgPool) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT event_type_id FROM member_preferences WHERE member_id = $1 ORDER BY event_type_id",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await
}

/// Current set of registered event ids for a member
pub async fn registration_ids_of(member_id: i64, pool: &PgPool) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT event_id FROM member_registrations WHERE member_id = $1 ORDER BY event_id",
    )
    .bind(member_id)
    .fetch_all(pool)
    .await
}

/// Whether the (member, event) registration pair exists
pub async fn registration_exists(
    member_id: i64,
    event_id: i64,
    pool: &PgPool,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM member_registrations
         WHERE member_id = $1 AND event_id = $2)",
    )
    .bind(member_id)
    .bind(event_id)
    .fetch_one(pool)
    .await
}

/// Insert one registration pair
pub async fn register(member_id: i64, event_id: i64, pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO member_registrations (member_id, event_id) VALUES ($1, $2)")
        .bind(member_id)
        .bind(event_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Delete one registration pair; deleting an absent pair is a no-op
pub async fn unregister(member_id: i64, event_id: i64, pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM member_registrations WHERE member_id = $1 AND event_id = $2")
        .bind(member_id)
        .bind(event_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Whether any member is registered to the event (delete guard)
pub async fn is_event_referenced(event_id: i64, pool: &PgPool) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM member_registrations WHERE event_id = $1)",
    )
    .bind(event_id)
    .fetch_one(pool)
    .await
}
