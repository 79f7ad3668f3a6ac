//! Handlers for the `/reviewers` resource.

use axum::extract::{Path, State};
use axum::Json;
use pokedex_core::cascade::{delete_with_dependents, CascadeOutcome};
use pokedex_core::types::DbId;
use pokedex_db::models::review::ReviewDto;
use pokedex_db::models::reviewer::{Reviewer, ReviewerDto};
use pokedex_db::repositories::{ReviewRepo, ReviewerRepo};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::handlers::common::{
    ensure_ids_match, ensure_reviewer_exists, ensure_unique_name, ensure_written,
    persistence_failure,
};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/v1/reviewers
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ReviewerDto>>>> {
    let reviewers = ReviewerRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: reviewers.into_iter().map(ReviewerDto::from).collect(),
    }))
}

/// GET /api/v1/reviewers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ReviewerDto>>> {
    let reviewer = ensure_reviewer_exists(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: reviewer.into(),
    }))
}

/// GET /api/v1/reviewers/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<ReviewDto>>>> {
    ensure_reviewer_exists(&state.pool, id).await?;
    let reviews = ReviewRepo::list_by_reviewer(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: reviews.into_iter().map(ReviewDto::from).collect(),
    }))
}

/// POST /api/v1/reviewers
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ReviewerDto>,
) -> AppResult<Json<DataResponse<ReviewerDto>>> {
    let existing = ReviewerRepo::list(&state.pool).await?;
    ensure_unique_name(
        "Reviewer",
        "last name",
        existing.iter().map(|r| r.last_name.as_str()),
        &input.last_name,
    )?;

    let reviewer = ReviewerRepo::create(&state.pool, &Reviewer::from(input))
        .await?
        .ok_or_else(|| persistence_failure("saving the reviewer"))?;

    tracing::info!(reviewer_id = reviewer.id, "Reviewer created");
    Ok(Json(DataResponse {
        data: reviewer.into(),
    }))
}

/// PUT /api/v1/reviewers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ReviewerDto>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_ids_match(id, input.id)?;
    ensure_reviewer_exists(&state.pool, id).await?;

    let updated = ReviewerRepo::update(&state.pool, &Reviewer::from(input)).await?;
    ensure_written(updated, "updating the reviewer")?;

    tracing::info!(reviewer_id = id, "Reviewer updated");
    Ok(Json(DataResponse::message("Successfully updated")))
}

/// DELETE /api/v1/reviewers/{id}
///
/// Same ordering as pokemon deletion: the reviewer's reviews go first, in
/// one batch.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MessageResponse>>> {
    ensure_reviewer_exists(&state.pool, id).await?;

    let pool = &state.pool;
    let review_ids = ReviewRepo::list_by_reviewer(pool, id)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    let outcome = delete_with_dependents(
        review_ids,
        |ids| async move { ReviewRepo::delete_many(pool, &ids).await },
        || ReviewerRepo::delete(pool, id),
    )
    .await?;

    match outcome {
        CascadeOutcome::Deleted { dependents } => {
            tracing::info!(reviewer_id = id, reviews_deleted = dependents, "Reviewer deleted");
            Ok(Json(DataResponse::message("Successfully deleted")))
        }
        CascadeOutcome::DependentsNotDeleted => {
            Err(persistence_failure("deleting the reviewer's reviews"))
        }
        CascadeOutcome::ParentNotDeleted { .. } => {
            Err(persistence_failure("deleting the reviewer"))
        }
    }
}
