//! Pokemon entity model and DTO.

use chrono::NaiveDate;
use pokedex_core::naming::validate_not_blank;
use pokedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `pokemon` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pokemon {
    pub id: DbId,
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Wire representation of a pokemon. `birth_date` is an ISO `YYYY-MM-DD` date.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PokemonDto {
    #[serde(default)]
    pub id: DbId,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<Pokemon> for PokemonDto {
    fn from(pokemon: Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name,
            birth_date: pokemon.birth_date,
        }
    }
}

impl From<PokemonDto> for Pokemon {
    fn from(dto: PokemonDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            birth_date: dto.birth_date,
        }
    }
}
