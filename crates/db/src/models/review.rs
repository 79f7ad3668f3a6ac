//! Review entity model and DTO.

use pokedex_core::naming::validate_not_blank;
use pokedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Review {
    pub id: DbId,
    pub title: String,
    pub text: String,
    /// Conventionally 1-5; not range checked.
    pub rating: i32,
    pub pokemon_id: DbId,
    pub reviewer_id: DbId,
}

/// Wire representation of a review.
///
/// The pokemon and reviewer are supplied by the create route; the reviewer
/// can later be changed through the reassignment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewDto {
    #[serde(default)]
    pub id: DbId,
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub text: String,
    pub rating: i32,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            title: review.title,
            text: review.text,
            rating: review.rating,
        }
    }
}

impl ReviewDto {
    /// Build the entity for this DTO, attached to the given pokemon and reviewer.
    pub fn into_review(self, pokemon_id: DbId, reviewer_id: DbId) -> Review {
        Review {
            id: self.id,
            title: self.title,
            text: self.text,
            rating: self.rating,
            pokemon_id,
            reviewer_id,
        }
    }
}
