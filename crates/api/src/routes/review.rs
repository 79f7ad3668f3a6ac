use axum::routing::{get, put};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// GET    /                                -> list
/// POST   /?pokemon_id=&reviewer_id=       -> create
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete
/// PUT    /{id}/reviewer/{reviewer_id}     -> change_reviewer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(review::list).post(review::create))
        .route(
            "/{id}",
            get(review::get_by_id)
                .put(review::update)
                .delete(review::delete),
        )
        .route("/{id}/reviewer/{reviewer_id}", put(review::change_reviewer))
}
