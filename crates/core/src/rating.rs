//! Review rating aggregation.

use serde::Serialize;

use crate::types::DbId;

/// Aggregated rating for a single pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingSummary {
    pub pokemon_id: DbId,
    pub review_count: usize,
    pub rating: i64,
}

/// Mean of `ratings` using integer division, truncating toward zero.
///
/// Returns exactly `0` when there are no ratings.
///
/// ```
/// use pokedex_core::rating::average_rating;
///
/// assert_eq!(average_rating(&[]), 0);
/// assert_eq!(average_rating(&[5, 3, 4]), 4);
/// assert_eq!(average_rating(&[5, 4]), 4);
/// ```
pub fn average_rating(ratings: &[i32]) -> i64 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    sum / ratings.len() as i64
}

/// Build the [`RatingSummary`] for `pokemon_id` from its raw review ratings.
pub fn summarize(pokemon_id: DbId, ratings: &[i32]) -> RatingSummary {
    RatingSummary {
        pokemon_id,
        review_count: ratings.len(),
        rating: average_rating(ratings),
    }
}
