//! Repository for the `owners` table.

use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::owner::Owner;
use crate::models::pokemon::Pokemon;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, gym, country_id";

/// Provides CRUD operations for owners and their country assignment.
pub struct OwnerRepo;

impl OwnerRepo {
    /// Whether an owner with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM owners WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Find an owner by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners WHERE id = $1");
        sqlx::query_as::<_, Owner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all owners ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Owner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owners ORDER BY id");
        sqlx::query_as::<_, Owner>(&query).fetch_all(pool).await
    }

    /// Insert a new owner, including its `country_id`. The `id` is ignored.
    pub async fn create(pool: &PgPool, owner: &Owner) -> Result<Option<Owner>, sqlx::Error> {
        let query = format!(
            "INSERT INTO owners (first_name, last_name, gym, country_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Owner>(&query)
            .bind(&owner.first_name)
            .bind(&owner.last_name)
            .bind(&owner.gym)
            .bind(owner.country_id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the name and gym of the owner identified by `owner.id`.
    ///
    /// The country is left alone; use [`OwnerRepo::change_country`].
    pub async fn update(pool: &PgPool, owner: &Owner) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE owners SET first_name = $2, last_name = $3, gym = $4 WHERE id = $1",
        )
        .bind(owner.id)
        .bind(&owner.first_name)
        .bind(&owner.last_name)
        .bind(&owner.gym)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an owner. Its pokemon links go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Point an owner at a different country.
    pub async fn change_country(
        pool: &PgPool,
        owner_id: DbId,
        country_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE owners SET country_id = $2 WHERE id = $1")
            .bind(owner_id)
            .bind(country_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Pokemon linked to an owner, one entry per join row.
    pub async fn list_pokemon(pool: &PgPool, owner_id: DbId) -> Result<Vec<Pokemon>, sqlx::Error> {
        sqlx::query_as::<_, Pokemon>(
            "SELECT p.id, p.name, p.birth_date \
             FROM pokemon_owners po \
             JOIN pokemon p ON p.id = po.pokemon_id \
             WHERE po.owner_id = $1 \
             ORDER BY po.id",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Owners linked to a pokemon, one entry per join row.
    pub async fn list_by_pokemon(
        pool: &PgPool,
        pokemon_id: DbId,
    ) -> Result<Vec<Owner>, sqlx::Error> {
        sqlx::query_as::<_, Owner>(
            "SELECT o.id, o.first_name, o.last_name, o.gym, o.country_id \
             FROM pokemon_owners po \
             JOIN owners o ON o.id = po.owner_id \
             WHERE po.pokemon_id = $1 \
             ORDER BY po.id",
        )
        .bind(pokemon_id)
        .fetch_all(pool)
        .await
    }
}
