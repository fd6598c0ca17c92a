use chrono::NaiveDate;
use sqlx::PgPool;

/// Event model - SQL persistence layer
///
/// `type_id` always references an existing event type; the foreign key is
/// RESTRICT so a type cannot disappear out from under its events.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Event {
    pub id: i64,
    pub type_id: i64,
    pub description: String,
    pub date: NaiveDate,
}

/// Event row joined with its type's description (list view)
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct EventWithType {
    pub id: i64,
    pub type_name: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Event {
    /// Find all events with the type description joined in, insertion order
    pub async fn find_all_with_type(pool: &PgPool) -> Result<Vec<EventWithType>, sqlx::Error> {
        sqlx::query_as::<_, EventWithType>(
            "SELECT e.id, t.description AS type_name, e.description, e.date
             FROM events e
             JOIN event_types t ON e.type_id = t.id
             ORDER BY e.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Find event by ID
    pub async fn find_by_id(id: i64, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert new event, returning the generated row
    pub async fn insert(
        type_id: i64,
        description: &str,
        date: NaiveDate,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO events (type_id, description, date)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(type_id)
        .bind(description)
        .bind(date)
        .fetch_one(pool)
        .await
    }

    /// Update an event. Returns false if the id is absent.
    pub async fn update(
        id: i64,
        type_id: i64,
        description: &str,
        date: NaiveDate,
        pool: &PgPool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET type_id = $2, description = $3, date = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(type_id)
        .bind(description)
        .bind(date)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an event. Returns false if the id is absent.
    pub async fn delete(id: i64, pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether the id resolves to an existing event
    pub async fn exists(id: i64, pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
