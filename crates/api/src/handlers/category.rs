//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::Json;
use pokedex_core::types::DbId;
use pokedex_db::models::category::{Category, CategoryDto};
use pokedex_db::models::pokemon::PokemonDto;
use pokedex_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::handlers::common::{
    ensure_category_exists, ensure_ids_match, ensure_unique_name, ensure_written,
    persistence_failure,
};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<CategoryDto>>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: categories.into_iter().map(CategoryDto::from).collect(),
    }))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CategoryDto>>> {
    let category = ensure_category_exists(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: category.into(),
    }))
}

/// GET /api/v1/categories/{id}/pokemon
///
/// One entry per link, so a pokemon linked twice is listed twice.
pub async fn list_pokemon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PokemonDto>>>> {
    ensure_category_exists(&state.pool, id).await?;
    let pokemon = CategoryRepo::list_pokemon(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: pokemon.into_iter().map(PokemonDto::from).collect(),
    }))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CategoryDto>,
) -> AppResult<Json<DataResponse<CategoryDto>>> {
    let existing = CategoryRepo::list(&state.pool).await?;
    ensure_unique_name(
        "Category",
        "name",
        existing.iter().map(|c| c.name.as_str()),
        &input.name,
    )?;

    let category = CategoryRepo::create(&state.pool, &Category::from(input))
        .await?
        .ok_or_else(|| persistence_failure("saving the category"))?;

    tracing::info!(category_id = category.id, "Category created");
    Ok(Json(DataResponse {
        data: category.into(),
    }))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CategoryDto>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_ids_match(id, input.id)?;
    ensure_category_exists(&state.pool, id).await?;

    let updated = CategoryRepo::update(&state.pool, &Category::from(input)).await?;
    ensure_written(updated, "updating the category")?;

    tracing::info!(category_id = id, "Category updated");
    Ok(Json(DataResponse::message("Successfully updated")))
}

/// DELETE /api/v1/categories/{id}
///
/// Links to pokemon go with the category; the pokemon themselves stay.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_category_exists(&state.pool, id).await?;

    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    ensure_written(deleted, "deleting the category")?;

    tracing::info!(category_id = id, "Category deleted");
    Ok(Json(DataResponse::message("Successfully deleted")))
}
