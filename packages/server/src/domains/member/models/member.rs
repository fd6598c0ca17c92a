use sqlx::{PgPool, Postgres, Transaction};

/// Member model - SQL persistence layer
///
/// The preference and registration sets live in the join tables, see
/// `models::associations`.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Member {
    pub id: i64,
    pub name: String,
}

impl Member {
    /// Find all members in insertion order
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM members ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Find member by ID
    pub async fn find_by_id(id: i64, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert new member inside the caller's transaction, returning the row
    pub async fn insert(
        name: &str,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>("INSERT INTO members (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }

    /// Update a member's name inside the caller's transaction.
    /// Returns false if the id is absent.
    pub async fn update_name(
        id: i64,
        name: &str,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE members SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a member. The join tables cascade, so preference and
    /// registration rows go with the member row.
    pub async fn delete(id: i64, pool: &PgPool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether the id resolves to an existing member
    pub async fn exists(id: i64, pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM members WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
