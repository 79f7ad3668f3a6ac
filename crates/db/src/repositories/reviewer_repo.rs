//! Repository for the `reviewers` table.

use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::reviewer::Reviewer;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name";

/// Provides CRUD operations for reviewers.
pub struct ReviewerRepo;

impl ReviewerRepo {
    /// Whether a reviewer with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reviewers WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reviewer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviewers WHERE id = $1");
        sqlx::query_as::<_, Reviewer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reviewers ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Reviewer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviewers ORDER BY id");
        sqlx::query_as::<_, Reviewer>(&query).fetch_all(pool).await
    }

    /// Insert a new reviewer. The `id` of `reviewer` is ignored.
    pub async fn create(
        pool: &PgPool,
        reviewer: &Reviewer,
    ) -> Result<Option<Reviewer>, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviewers (first_name, last_name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reviewer>(&query)
            .bind(&reviewer.first_name)
            .bind(&reviewer.last_name)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(pool: &PgPool, reviewer: &Reviewer) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE reviewers SET first_name = $2, last_name = $3 WHERE id = $1")
                .bind(reviewer.id)
                .bind(&reviewer.first_name)
                .bind(&reviewer.last_name)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a reviewer. Fails with a foreign key violation while reviews
    /// still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviewers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
