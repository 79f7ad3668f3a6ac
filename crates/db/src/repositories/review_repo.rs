//! Repository for the `reviews` table.

use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::Review;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, text, rating, pokemon_id, reviewer_id";

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Whether a review with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM reviews WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a review by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reviews ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY id");
        sqlx::query_as::<_, Review>(&query).fetch_all(pool).await
    }

    /// Reviews of one pokemon, ordered by id.
    pub async fn list_by_pokemon(
        pool: &PgPool,
        pokemon_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE pokemon_id = $1 ORDER BY id");
        sqlx::query_as::<_, Review>(&query)
            .bind(pokemon_id)
            .fetch_all(pool)
            .await
    }

    /// Reviews written by one reviewer, ordered by id.
    pub async fn list_by_reviewer(
        pool: &PgPool,
        reviewer_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE reviewer_id = $1 ORDER BY id");
        sqlx::query_as::<_, Review>(&query)
            .bind(reviewer_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a new review for `review.pokemon_id` by `review.reviewer_id`.
    /// The `id` is ignored.
    pub async fn create(pool: &PgPool, review: &Review) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (title, text, rating, pokemon_id, reviewer_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(&review.title)
            .bind(&review.text)
            .bind(review.rating)
            .bind(review.pokemon_id)
            .bind(review.reviewer_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite title, text and rating of the review identified by `review.id`.
    ///
    /// The pokemon never changes; the reviewer changes only through
    /// [`ReviewRepo::change_reviewer`].
    pub async fn update(pool: &PgPool, review: &Review) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE reviews SET title = $2, text = $3, rating = $4 WHERE id = $1")
                .bind(review.id)
                .bind(&review.title)
                .bind(&review.text)
                .bind(review.rating)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a single review.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a batch of reviews in one statement. Returns `true` if any row
    /// was removed.
    pub async fn delete_many(pool: &PgPool, ids: &[DbId]) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        tracing::debug!(
            requested = ids.len(),
            deleted = result.rows_affected(),
            "Batch review delete"
        );
        Ok(result.rows_affected() > 0)
    }

    /// Attribute a review to a different reviewer.
    pub async fn change_reviewer(
        pool: &PgPool,
        review_id: DbId,
        reviewer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE reviews SET reviewer_id = $2 WHERE id = $1")
            .bind(review_id)
            .bind(reviewer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
