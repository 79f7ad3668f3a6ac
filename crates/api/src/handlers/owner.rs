//! Handlers for the `/owners` resource.

use axum::extract::{Path, State};
use axum::Json;
use pokedex_core::types::DbId;
use pokedex_db::models::country::CountryDto;
use pokedex_db::models::owner::{Owner, OwnerDto};
use pokedex_db::models::pokemon::PokemonDto;
use pokedex_db::repositories::{CountryRepo, OwnerRepo};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::handlers::common::{
    ensure_country_exists, ensure_ids_match, ensure_owner_exists, ensure_written,
};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/owners
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<OwnerDto>>>> {
    let owners = OwnerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: owners.into_iter().map(OwnerDto::from).collect(),
    }))
}

/// GET /api/v1/owners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OwnerDto>>> {
    let owner = ensure_owner_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: owner.into() }))
}

/// GET /api/v1/owners/{id}/pokemon
pub async fn list_pokemon(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<PokemonDto>>>> {
    ensure_owner_exists(&state.pool, id).await?;
    let pokemon = OwnerRepo::list_pokemon(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: pokemon.into_iter().map(PokemonDto::from).collect(),
    }))
}

/// GET /api/v1/owners/{id}/country
///
/// `data` is `null` while the owner has no country.
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<CountryDto>>>> {
    ensure_owner_exists(&state.pool, id).await?;
    let country = CountryRepo::find_by_owner(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: country.map(CountryDto::from),
    }))
}

/// PUT /api/v1/owners/{id}
///
/// Name and gym only; the country moves through `change_country`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<OwnerDto>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_ids_match(id, input.id)?;
    ensure_owner_exists(&state.pool, id).await?;

    let updated = OwnerRepo::update(&state.pool, &Owner::from(input)).await?;
    ensure_written(updated, "updating the owner")?;

    tracing::info!(owner_id = id, "Owner updated");
    Ok(Json(DataResponse::message("Successfully updated")))
}

/// PUT /api/v1/owners/{id}/country/{country_id}
pub async fn change_country(
    State(state): State<AppState>,
    Path((id, country_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_owner_exists(&state.pool, id).await?;
    ensure_country_exists(&state.pool, country_id).await?;

    let changed = OwnerRepo::change_country(&state.pool, id, country_id).await?;
    ensure_written(changed, "changing the owner's country")?;

    tracing::info!(owner_id = id, country_id, "Owner country changed");
    Ok(Json(DataResponse::message("Successfully changed country")))
}

/// DELETE /api/v1/owners/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_owner_exists(&state.pool, id).await?;

    let deleted = OwnerRepo::delete(&state.pool, id).await?;
    ensure_written(deleted, "deleting the owner")?;

    tracing::info!(owner_id = id, "Owner deleted");
    Ok(Json(DataResponse::message("Successfully deleted")))
}
