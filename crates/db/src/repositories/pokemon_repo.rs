//! Repository for the `pokemon` table and its `pokemon_categories` /
//! `pokemon_owners` join tables.

use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::pokemon::Pokemon;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birth_date";

/// Provides CRUD operations for pokemon and their category/owner links.
pub struct PokemonRepo;

impl PokemonRepo {
    /// Whether a pokemon with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pokemon WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a pokemon by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pokemon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon WHERE id = $1");
        sqlx::query_as::<_, Pokemon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a pokemon by exact (case-sensitive) name. With duplicate names the
    /// lowest id wins.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Pokemon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon WHERE name = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Pokemon>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all pokemon ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Pokemon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon ORDER BY id");
        sqlx::query_as::<_, Pokemon>(&query).fetch_all(pool).await
    }

    /// Insert a bare pokemon with no links. The `id` is ignored.
    pub async fn create(pool: &PgPool, pokemon: &Pokemon) -> Result<Option<Pokemon>, sqlx::Error> {
        let query =
            format!("INSERT INTO pokemon (name, birth_date) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Pokemon>(&query)
            .bind(&pokemon.name)
            .bind(pokemon.birth_date)
            .fetch_optional(pool)
            .await
    }

    /// Insert a pokemon together with one owner link and one category link.
    ///
    /// All three rows are written in a single transaction.
    pub async fn create_with_links(
        pool: &PgPool,
        pokemon: &Pokemon,
        owner_id: DbId,
        category_id: DbId,
    ) -> Result<Option<Pokemon>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query =
            format!("INSERT INTO pokemon (name, birth_date) VALUES ($1, $2) RETURNING {COLUMNS}");
        let Some(created) = sqlx::query_as::<_, Pokemon>(&insert_query)
            .bind(&pokemon.name)
            .bind(pokemon.birth_date)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query("INSERT INTO pokemon_owners (pokemon_id, owner_id) VALUES ($1, $2)")
            .bind(created.id)
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO pokemon_categories (pokemon_id, category_id) VALUES ($1, $2)")
            .bind(created.id)
            .bind(category_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(created))
    }

    /// Overwrite name and birth date of the pokemon identified by `pokemon.id`.
    pub async fn update(pool: &PgPool, pokemon: &Pokemon) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE pokemon SET name = $2, birth_date = $3 WHERE id = $1")
            .bind(pokemon.id)
            .bind(&pokemon.name)
            .bind(pokemon.birth_date)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a pokemon. Its category and owner links go with it; reviews
    /// must already be gone.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Raw rating values of every review of a pokemon.
    pub async fn ratings(pool: &PgPool, pokemon_id: DbId) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT rating FROM reviews WHERE pokemon_id = $1 ORDER BY id")
            .bind(pokemon_id)
            .fetch_all(pool)
            .await
    }

    /// Link a pokemon to a category. Repeated calls add repeated rows.
    pub async fn add_category(
        pool: &PgPool,
        pokemon_id: DbId,
        category_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO pokemon_categories (pokemon_id, category_id) VALUES ($1, $2)")
                .bind(pokemon_id)
                .bind(category_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove one link between a pokemon and a category (the oldest, if the
    /// pair was linked more than once).
    pub async fn remove_category(
        pool: &PgPool,
        pokemon_id: DbId,
        category_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM pokemon_categories WHERE id = (
                SELECT id FROM pokemon_categories
                WHERE pokemon_id = $1 AND category_id = $2
                ORDER BY id LIMIT 1
             )",
        )
        .bind(pokemon_id)
        .bind(category_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Link a pokemon to an owner. Repeated calls add repeated rows.
    pub async fn add_owner(
        pool: &PgPool,
        pokemon_id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("INSERT INTO pokemon_owners (pokemon_id, owner_id) VALUES ($1, $2)")
            .bind(pokemon_id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove one link between a pokemon and an owner (the oldest, if the
    /// pair was linked more than once).
    pub async fn remove_owner(
        pool: &PgPool,
        pokemon_id: DbId,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM pokemon_owners WHERE id = (
                SELECT id FROM pokemon_owners
                WHERE pokemon_id = $1 AND owner_id = $2
                ORDER BY id LIMIT 1
             )",
        )
        .bind(pokemon_id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
