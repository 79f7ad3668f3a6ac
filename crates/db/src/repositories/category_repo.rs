//! Repository for the `categories` table.

use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::pokemon::Pokemon;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Whether a category with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Insert a new category. The `id` of `category` is ignored.
    pub async fn create(
        pool: &PgPool,
        category: &Category,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&category.name)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every mutable field of the category identified by `category.id`.
    pub async fn update(pool: &PgPool, category: &Category) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(category.id)
            .bind(&category.name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a category. Its pokemon links go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Pokemon linked to a category, one entry per join row.
    pub async fn list_pokemon(pool: &PgPool, category_id: DbId) -> Result<Vec<Pokemon>, sqlx::Error> {
        sqlx::query_as::<_, Pokemon>(
            "SELECT p.id, p.name, p.birth_date \
             FROM pokemon_categories pc \
             JOIN pokemon p ON p.id = pc.pokemon_id \
             WHERE pc.category_id = $1 \
             ORDER BY pc.id",
        )
        .bind(category_id)
        .fetch_all(pool)
        .await
    }
}
