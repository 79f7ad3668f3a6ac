//! Country entity model and DTO.

use pokedex_core::naming::validate_not_blank;
use pokedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `countries` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Country {
    pub id: DbId,
    pub name: String,
}

/// Wire representation of a country.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CountryDto {
    #[serde(default)]
    pub id: DbId,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
}

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
        }
    }
}

impl From<CountryDto> for Country {
    fn from(dto: CountryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
