//! Owner entity model and DTO.

use pokedex_core::naming::validate_not_blank;
use pokedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `owners` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Owner {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub gym: String,
    /// `None` until a country is assigned, or after the country is deleted.
    pub country_id: Option<DbId>,
}

/// Wire representation of an owner.
///
/// The country is not part of the payload: it is chosen by the create route
/// and changed through the dedicated reassignment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OwnerDto {
    #[serde(default)]
    pub id: DbId,
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub gym: String,
}

impl From<Owner> for OwnerDto {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id,
            first_name: owner.first_name,
            last_name: owner.last_name,
            gym: owner.gym,
        }
    }
}

impl From<OwnerDto> for Owner {
    fn from(dto: OwnerDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            gym: dto.gym,
            country_id: None,
        }
    }
}
