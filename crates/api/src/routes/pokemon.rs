use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pokemon;
use crate::state::AppState;

/// Routes mounted at `/pokemon`.
///
/// ```text
/// GET    /                                -> list
/// POST   /?owner_id=&category_id=         -> create
/// GET    /by-name/{name}                  -> get_by_name
/// GET    /{id}                            -> get_by_id
/// PUT    /{id}                            -> update
/// DELETE /{id}                            -> delete (reviews first)
/// GET    /{id}/rating                     -> rating
/// GET    /{id}/reviews                    -> list_reviews
/// GET    /{id}/owners                     -> list_owners
/// POST   /{id}/categories/{category_id}   -> add_category
/// DELETE /{id}/categories/{category_id}   -> remove_category
/// POST   /{id}/owners/{owner_id}          -> add_owner
/// DELETE /{id}/owners/{owner_id}          -> remove_owner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pokemon::list).post(pokemon::create))
        .route("/by-name/{name}", get(pokemon::get_by_name))
        .route(
            "/{id}",
            get(pokemon::get_by_id)
                .put(pokemon::update)
                .delete(pokemon::delete),
        )
        .route("/{id}/rating", get(pokemon::rating))
        .route("/{id}/reviews", get(pokemon::list_reviews))
        .route("/{id}/owners", get(pokemon::list_owners))
        .route(
            "/{id}/categories/{category_id}",
            post(pokemon::add_category).delete(pokemon::remove_category),
        )
        .route(
            "/{id}/owners/{owner_id}",
            post(pokemon::add_owner).delete(pokemon::remove_owner),
        )
}
