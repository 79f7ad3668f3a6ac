//! Repository for the `countries` table.

use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::country::Country;
use crate::models::owner::Owner;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for countries.
pub struct CountryRepo;

impl CountryRepo {
    /// Whether a country with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM countries WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find a country by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries WHERE id = $1");
        sqlx::query_as::<_, Country>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all countries ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM countries ORDER BY id");
        sqlx::query_as::<_, Country>(&query).fetch_all(pool).await
    }

    /// Insert a new country. The `id` of `country` is ignored.
    pub async fn create(pool: &PgPool, country: &Country) -> Result<Option<Country>, sqlx::Error> {
        let query = format!("INSERT INTO countries (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Country>(&query)
            .bind(&country.name)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite every mutable field of the country identified by `country.id`.
    pub async fn update(pool: &PgPool, country: &Country) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE countries SET name = $2 WHERE id = $1")
            .bind(country.id)
            .bind(&country.name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a country. Owners in it keep existing with no country.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The country an owner belongs to, if one is assigned.
    pub async fn find_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Option<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "SELECT c.id, c.name \
             FROM owners o \
             JOIN countries c ON c.id = o.country_id \
             WHERE o.id = $1",
        )
        .bind(owner_id)
        .fetch_optional(pool)
        .await
    }

    /// Owners belonging to a country, ordered by id.
    pub async fn list_owners(pool: &PgPool, country_id: DbId) -> Result<Vec<Owner>, sqlx::Error> {
        sqlx::query_as::<_, Owner>(
            "SELECT id, first_name, last_name, gym, country_id \
             FROM owners WHERE country_id = $1 ORDER BY id",
        )
        .bind(country_id)
        .fetch_all(pool)
        .await
    }
}
