use sqlx::PgPool;

/// EventType model - SQL persistence layer
///
/// A category of club events ("Prova", "Treino", ...). Events reference a
/// type by id, which blocks deletion while any referencing event exists.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct EventType {
    pub id: i64,
    pub description: String,
}

impl EventType {
    /// Find all event types in insertion order
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM event_types ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find event type by ID
    pub async fn find_by_id(id: i64, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM event_types WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert new event type, returning the generated row
    pub async fn insert(description: &str, pool: &PgPool) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO event_types (description) VALUES ($1) RETURNING *",
        )
        .bind(description)
        .fetch_one(pool)
        .await
    }

    /// Update an event type's description. Returns false if the id is absent.
    pub async fn update(id: i64, description: &str, pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE event_types SET description = $2 WHERE id = $1")
            .bind(id)
            .bind(description)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an event type. Returns false if the id is absent.
    pub async fn delete(id: i64, pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether any event references this type (delete guard)
    pub async fn is_referenced(id: i64, pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM events WHERE type_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Whether the id resolves to an existing event type
    pub async fn exists(id: i64, pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM event_types WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
