use axum::routing::{get, put};
use axum::Router;

use crate::handlers::owner;
use crate::state::AppState;

/// Routes mounted at `/owners`.
///
/// Owners are created under their country (`POST /countries/{id}/owners`).
///
/// ```text
/// GET    /                              -> list
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/pokemon                  -> list_pokemon
/// GET    /{id}/country                  -> get_country
/// PUT    /{id}/country/{country_id}     -> change_country
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(owner::list))
        .route(
            "/{id}",
            get(owner::get_by_id)
                .put(owner::update)
                .delete(owner::delete),
        )
        .route("/{id}/pokemon", get(owner::list_pokemon))
        .route("/{id}/country", get(owner::get_country))
        .route("/{id}/country/{country_id}", put(owner::change_country))
}
