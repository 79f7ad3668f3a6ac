//! Handlers for the `/reviews` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use pokedex_core::types::DbId;
use pokedex_db::models::review::ReviewDto;
use pokedex_db::repositories::ReviewRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::handlers::common::{
    ensure_ids_match, ensure_pokemon_exists, ensure_review_exists, ensure_reviewer_exists,
    ensure_unique_name, ensure_written, persistence_failure,
};
use crate::query::CreateReviewParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/reviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ReviewDto>>>> {
    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: reviews.into_iter().map(ReviewDto::from).collect(),
    }))
}

/// GET /api/v1/reviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ReviewDto>>> {
    let review = ensure_review_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: review.into() }))
}

/// POST /api/v1/reviews?pokemon_id=&reviewer_id=
///
/// Titles are unique across all reviews.
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<CreateReviewParams>,
    ValidatedJson(input): ValidatedJson<ReviewDto>,
) -> AppResult<Json<DataResponse<ReviewDto>>> {
    ensure_pokemon_exists(&state.pool, params.pokemon_id).await?;
    ensure_reviewer_exists(&state.pool, params.reviewer_id).await?;

    let existing = ReviewRepo::list(&state.pool).await?;
    ensure_unique_name(
        "Review",
        "title",
        existing.iter().map(|r| r.title.as_str()),
        &input.title,
    )?;

    let review = input.into_review(params.pokemon_id, params.reviewer_id);
    let review = ReviewRepo::create(&state.pool, &review)
        .await?
        .ok_or_else(|| persistence_failure("saving the review"))?;

    tracing::info!(
        review_id = review.id,
        pokemon_id = params.pokemon_id,
        reviewer_id = params.reviewer_id,
        "Review created"
    );
    Ok(Json(DataResponse { data: review.into() }))
}

/// PUT /api/v1/reviews/{id}
///
/// Title, text and rating only. The pokemon is fixed at creation and the
/// reviewer moves through `change_reviewer`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ReviewDto>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_ids_match(id, input.id)?;
    let current = ensure_review_exists(&state.pool, id).await?;

    let review = input.into_review(current.pokemon_id, current.reviewer_id);
    let updated = ReviewRepo::update(&state.pool, &review).await?;
    ensure_written(updated, "updating the review")?;

    tracing::info!(review_id = id, "Review updated");
    Ok(Json(DataResponse::message("Successfully updated")))
}

/// PUT /api/v1/reviews/{id}/reviewer/{reviewer_id}
pub async fn change_reviewer(
    State(state): State<AppState>,
    Path((id, reviewer_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_review_exists(&state.pool, id).await?;
    ensure_reviewer_exists(&state.pool, reviewer_id).await?;

    let changed = ReviewRepo::change_reviewer(&state.pool, id, reviewer_id).await?;
    ensure_written(changed, "changing the review's reviewer")?;

    tracing::info!(review_id = id, reviewer_id, "Review reviewer changed");
    Ok(Json(DataResponse::message("Successfully changed reviewer")))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_review_exists(&state.pool, id).await?;

    let deleted = ReviewRepo::delete(&state.pool, id).await?;
    ensure_written(deleted, "deleting the review")?;

    tracing::info!(review_id = id, "Review deleted");
    Ok(Json(DataResponse::message("Successfully deleted")))
}
