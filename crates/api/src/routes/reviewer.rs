use axum::routing::get;
use axum::Router;

use crate::handlers::reviewer;
use crate::state::AppState;

/// Routes mounted at `/reviewers`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete (reviews first)
/// GET    /{id}/reviews     -> list_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviewer::list).post(reviewer::create))
        .route(
            "/{id}",
            get(reviewer::get_by_id)
                .put(reviewer::update)
                .delete(reviewer::delete),
        )
        .route("/{id}/reviews", get(reviewer::list_reviews))
}
