//! Handlers for the `/countries` resource, including owner creation.
//!
//! Owners are always created inside a country:
//! `POST /countries/{id}/owners`

use axum::extract::{Path, State};
use axum::Json;
use pokedex_core::types::DbId;
use pokedex_db::models::country::{Country, CountryDto};
use pokedex_db::models::owner::{Owner, OwnerDto};
use pokedex_db::repositories::{CountryRepo, OwnerRepo};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::handlers::common::{
    ensure_country_exists, ensure_ids_match, ensure_unique_name, ensure_written,
    persistence_failure,
};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/countries
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<CountryDto>>>> {
    let countries = CountryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: countries.into_iter().map(CountryDto::from).collect(),
    }))
}

/// GET /api/v1/countries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CountryDto>>> {
    let country = ensure_country_exists(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: country.into(),
    }))
}

/// GET /api/v1/countries/{id}/owners
pub async fn list_owners(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<OwnerDto>>>> {
    ensure_country_exists(&state.pool, id).await?;
    let owners = CountryRepo::list_owners(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: owners.into_iter().map(OwnerDto::from).collect(),
    }))
}

/// POST /api/v1/countries
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CountryDto>,
) -> AppResult<Json<DataResponse<CountryDto>>> {
    let existing = CountryRepo::list(&state.pool).await?;
    ensure_unique_name(
        "Country",
        "name",
        existing.iter().map(|c| c.name.as_str()),
        &input.name,
    )?;

    let country = CountryRepo::create(&state.pool, &Country::from(input))
        .await?
        .ok_or_else(|| persistence_failure("saving the country"))?;

    tracing::info!(country_id = country.id, "Country created");
    Ok(Json(DataResponse {
        data: country.into(),
    }))
}

/// POST /api/v1/countries/{id}/owners
///
/// Owner last names are unique across all countries.
pub async fn create_owner(
    State(state): State<AppState>,
    Path(country_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<OwnerDto>,
) -> AppResult<Json<DataResponse<OwnerDto>>> {
    ensure_country_exists(&state.pool, country_id).await?;

    let existing = OwnerRepo::list(&state.pool).await?;
    ensure_unique_name(
        "Owner",
        "last name",
        existing.iter().map(|o| o.last_name.as_str()),
        &input.last_name,
    )?;

    let owner = Owner {
        country_id: Some(country_id),
        ..Owner::from(input)
    };
    let owner = OwnerRepo::create(&state.pool, &owner)
        .await?
        .ok_or_else(|| persistence_failure("saving the owner"))?;

    tracing::info!(owner_id = owner.id, country_id, "Owner created");
    Ok(Json(DataResponse { data: owner.into() }))
}

/// PUT /api/v1/countries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CountryDto>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_ids_match(id, input.id)?;
    ensure_country_exists(&state.pool, id).await?;

    let updated = CountryRepo::update(&state.pool, &Country::from(input)).await?;
    ensure_written(updated, "updating the country")?;

    tracing::info!(country_id = id, "Country updated");
    Ok(Json(DataResponse::message("Successfully updated")))
}

/// DELETE /api/v1/countries/{id}
///
/// Owners of the country remain, with no country assigned.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_country_exists(&state.pool, id).await?;

    let deleted = CountryRepo::delete(&state.pool, id).await?;
    ensure_written(deleted, "deleting the country")?;

    tracing::info!(country_id = id, "Country deleted");
    Ok(Json(DataResponse::message("Successfully deleted")))
}
