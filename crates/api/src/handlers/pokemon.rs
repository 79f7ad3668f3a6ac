//! Handlers for the `/pokemon` resource.
//!
//! A pokemon is created with one owner and one category
//! (`POST /pokemon?owner_id=&category_id=`); further links are managed via
//! `/pokemon/{id}/categories/{category_id}` and `/pokemon/{id}/owners/{owner_id}`.

use axum::extract::{Path, Query, State};
use axum::Json;
use pokedex_core::cascade::{delete_with_dependents, CascadeOutcome};
use pokedex_core::error::CoreError;
use pokedex_core::rating::{summarize, RatingSummary};
use pokedex_core::types::DbId;
use pokedex_db::models::owner::OwnerDto;
use pokedex_db::models::pokemon::{Pokemon, PokemonDto};
use pokedex_db::models::review::ReviewDto;
use pokedex_db::repositories::{OwnerRepo, PokemonRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::common::{
    ensure_category_exists, ensure_ids_match, ensure_owner_exists, ensure_pokemon_exists,
    ensure_unique_name, ensure_written, persistence_failure,
};
use crate::query::CreatePokemonParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/pokemon
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<PokemonDto>>>> {
    let pokemon = PokemonRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: pokemon.into_iter().map(PokemonDto::from).collect(),
    }))
}

/// GET /api/v1/pokemon/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PokemonDto>>> {
    let pokemon = ensure_pokemon_exists(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: pokemon.into(),
    }))
}

/// GET /api/v1/pokemon/by-name/{name}
///
/// Exact, case-sensitive match.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<DataResponse<PokemonDto>>> {
    let pokemon = PokemonRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundByName {
            entity: "Pokemon",
            name,
        }))?;
    Ok(Json(DataResponse {
        data: pokemon.into(),
    }))
}

/// GET /api/v1/pokemon/{id}/rating
pub async fn rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RatingSummary>>> {
    ensure_pokemon_exists(&state.pool, id).await?;
    let ratings = PokemonRepo::ratings(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: summarize(id, &ratings),
    }))
}

/// GET /api/v1/pokemon/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ReviewDto>>>> {
    ensure_pokemon_exists(&state.pool, id).await?;
    let reviews = ReviewRepo::list_by_pokemon(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: reviews.into_iter().map(ReviewDto::from).collect(),
    }))
}

/// GET /api/v1/pokemon/{id}/owners
pub async fn list_owners(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<OwnerDto>>>> {
    ensure_pokemon_exists(&state.pool, id).await?;
    let owners = OwnerRepo::list_by_pokemon(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: owners.into_iter().map(OwnerDto::from).collect(),
    }))
}

/// POST /api/v1/pokemon?owner_id=&category_id=
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<CreatePokemonParams>,
    ValidatedJson(input): ValidatedJson<PokemonDto>,
) -> AppResult<Json<DataResponse<PokemonDto>>> {
    ensure_owner_exists(&state.pool, params.owner_id).await?;
    ensure_category_exists(&state.pool, params.category_id).await?;

    let existing = PokemonRepo::list(&state.pool).await?;
    ensure_unique_name(
        "Pokemon",
        "name",
        existing.iter().map(|p| p.name.as_str()),
        &input.name,
    )?;

    let pokemon = PokemonRepo::create_with_links(
        &state.pool,
        &Pokemon::from(input),
        params.owner_id,
        params.category_id,
    )
    .await?
    .ok_or_else(|| persistence_failure("saving the pokemon"))?;

    tracing::info!(
        pokemon_id = pokemon.id,
        owner_id = params.owner_id,
        category_id = params.category_id,
        "Pokemon created"
    );
    Ok(Json(DataResponse {
        data: pokemon.into(),
    }))
}

/// PUT /api/v1/pokemon/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<PokemonDto>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_ids_match(id, input.id)?;
    ensure_pokemon_exists(&state.pool, id).await?;

    let updated = PokemonRepo::update(&state.pool, &Pokemon::from(input)).await?;
    ensure_written(updated, "updating the pokemon")?;

    tracing::info!(pokemon_id = id, "Pokemon updated");
    Ok(Json(DataResponse::message("Successfully updated")))
}

/// DELETE /api/v1/pokemon/{id}
///
/// Deletes the pokemon's reviews as one batch first; if that batch fails
/// the pokemon is left in place.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_pokemon_exists(&state.pool, id).await?;

    let pool = &state.pool;
    let review_ids = ReviewRepo::list_by_pokemon(pool, id)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    let outcome = delete_with_dependents(
        review_ids,
        |ids| async move { ReviewRepo::delete_many(pool, &ids).await },
        || PokemonRepo::delete(pool, id),
    )
    .await?;

    match outcome {
        CascadeOutcome::Deleted { dependents } => {
            tracing::info!(pokemon_id = id, reviews_deleted = dependents, "Pokemon deleted");
            Ok(Json(DataResponse::message("Successfully deleted")))
        }
        CascadeOutcome::DependentsNotDeleted => {
            Err(persistence_failure("deleting the pokemon's reviews"))
        }
        CascadeOutcome::ParentNotDeleted { .. } => Err(persistence_failure("deleting the pokemon")),
    }
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// POST /api/v1/pokemon/{id}/categories/{category_id}
///
/// Linking an already linked pair adds a second link.
pub async fn add_category(
    State(state): State<AppState>,
    Path((id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_pokemon_exists(&state.pool, id).await?;
    ensure_category_exists(&state.pool, category_id).await?;

    let added = PokemonRepo::add_category(&state.pool, id, category_id).await?;
    ensure_written(added, "linking the category")?;

    tracing::info!(pokemon_id = id, category_id, "Category linked");
    Ok(Json(DataResponse::message("Successfully linked category")))
}

/// DELETE /api/v1/pokemon/{id}/categories/{category_id}
pub async fn remove_category(
    State(state): State<AppState>,
    Path((id, category_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_pokemon_exists(&state.pool, id).await?;
    ensure_category_exists(&state.pool, category_id).await?;

    let removed = PokemonRepo::remove_category(&state.pool, id, category_id).await?;
    ensure_written(removed, "unlinking the category")?;

    tracing::info!(pokemon_id = id, category_id, "Category unlinked");
    Ok(Json(DataResponse::message("Successfully unlinked category")))
}

/// POST /api/v1/pokemon/{id}/owners/{owner_id}
pub async fn add_owner(
    State(state): State<AppState>,
    Path((id, owner_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_pokemon_exists(&state.pool, id).await?;
    ensure_owner_exists(&state.pool, owner_id).await?;

    let added = PokemonRepo::add_owner(&state.pool, id, owner_id).await?;
    ensure_written(added, "linking the owner")?;

    tracing::info!(pokemon_id = id, owner_id, "Owner linked");
    Ok(Json(DataResponse::message("Successfully linked owner")))
}

/// DELETE /api/v1/pokemon/{id}/owners/{owner_id}
pub async fn remove_owner(
    State(state): State<AppState>,
    Path((id, owner_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_pokemon_exists(&state.pool, id).await?;
    ensure_owner_exists(&state.pool, owner_id).await?;

    let removed = PokemonRepo::remove_owner(&state.pool, id, owner_id).await?;
    ensure_written(removed, "unlinking the owner")?;

    tracing::info!(pokemon_id = id, owner_id, "Owner unlinked");
    Ok(Json(DataResponse::message("Successfully unlinked owner")))
}
