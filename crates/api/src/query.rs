//! Query parameter types for the create endpoints that take their parent
//! references from the query string.

use pokedex_core::types::DbId;
use serde::Deserialize;

/// `POST /pokemon?owner_id=&category_id=`
#[derive(Debug, Deserialize)]
pub struct CreatePokemonParams {
    pub owner_id: DbId,
    pub category_id: DbId,
}

/// `POST /reviews?pokemon_id=&reviewer_id=`
#[derive(Debug, Deserialize)]
pub struct CreateReviewParams {
    pub pokemon_id: DbId,
    pub reviewer_id: DbId,
}
