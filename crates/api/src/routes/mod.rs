pub mod category;
pub mod country;
pub mod health;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /categories     category CRUD, pokemon in a category
/// /countries      country CRUD, owners of a country, owner creation
/// /owners         owner read/update/delete, owned pokemon, country reassignment
/// /pokemon        pokemon CRUD, lookup by name, rating, reviews, owner and category links
/// /reviews        review CRUD, reviewer reassignment
/// /reviewers      reviewer CRUD, reviews by a reviewer
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", category::router())
        .nest("/countries", country::router())
        .nest("/owners", owner::router())
        .nest("/pokemon", pokemon::router())
        .nest("/reviews", review::router())
        .nest("/reviewers", reviewer::router())
}
