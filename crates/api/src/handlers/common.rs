//! Checks shared by every resource handler.

use pokedex_core::error::CoreError;
use pokedex_core::naming::ensure_unique;
use pokedex_core::types::DbId;
use pokedex_db::models::category::Category;
use pokedex_db::models::country::Country;
use pokedex_db::models::owner::Owner;
use pokedex_db::models::pokemon::Pokemon;
use pokedex_db::models::review::Review;
use pokedex_db::models::reviewer::Reviewer;
use pokedex_db::repositories::{
    CategoryRepo, CountryRepo, OwnerRepo, PokemonRepo, ReviewRepo, ReviewerRepo,
};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Existence
// ---------------------------------------------------------------------------

/// Verify that a category exists, returning the full row.
pub async fn ensure_category_exists(pool: &PgPool, id: DbId) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Category", id }.into())
}

/// Verify that a country exists, returning the full row.
pub async fn ensure_country_exists(pool: &PgPool, id: DbId) -> AppResult<Country> {
    CountryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Country", id }.into())
}

/// Verify that an owner exists, returning the full row.
pub async fn ensure_owner_exists(pool: &PgPool, id: DbId) -> AppResult<Owner> {
    OwnerRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Owner", id }.into())
}

/// Verify that a pokemon exists, returning the full row.
pub async fn ensure_pokemon_exists(pool: &PgPool, id: DbId) -> AppResult<Pokemon> {
    PokemonRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Pokemon", id }.into())
}

/// Verify that a review exists, returning the full row.
pub async fn ensure_review_exists(pool: &PgPool, id: DbId) -> AppResult<Review> {
    ReviewRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Review", id }.into())
}

/// Verify that a reviewer exists, returning the full row.
pub async fn ensure_reviewer_exists(pool: &PgPool, id: DbId) -> AppResult<Reviewer> {
    ReviewerRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Reviewer", id }.into())
}

// ---------------------------------------------------------------------------
// Payload checks
// ---------------------------------------------------------------------------

/// Reject an update whose body id disagrees with the path id.
///
/// Runs before any lookup, so a mismatch is a 400 even for unknown ids.
pub fn ensure_ids_match(path_id: DbId, body_id: DbId) -> AppResult<()> {
    if path_id != body_id {
        return Err(CoreError::Validation(format!(
            "Path id {path_id} does not match body id {body_id}"
        ))
        .into());
    }
    Ok(())
}

/// [`ensure_unique`] with a warning when the candidate is rejected.
pub fn ensure_unique_name<'a, I>(
    entity: &'static str,
    field: &'static str,
    existing: I,
    candidate: &str,
) -> AppResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    ensure_unique(entity, field, existing, candidate).map_err(|err| {
        tracing::warn!(entity, field, candidate, "Rejected duplicate");
        AppError::from(err)
    })
}

// ---------------------------------------------------------------------------
// Write results
// ---------------------------------------------------------------------------

/// The error returned when a write affected no rows.
pub fn persistence_failure(action: &str) -> AppError {
    tracing::warn!(action, "Write affected no rows");
    CoreError::PersistenceFailure(format!("Something went wrong while {action}")).into()
}

/// Turn a repository's affected-rows flag into a result.
pub fn ensure_written(written: bool, action: &str) -> AppResult<()> {
    if written {
        Ok(())
    } else {
        Err(persistence_failure(action))
    }
}
