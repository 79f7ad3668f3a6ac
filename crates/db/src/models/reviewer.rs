//! Reviewer entity model and DTO.

use pokedex_core::naming::validate_not_blank;
use pokedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `reviewers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Reviewer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// Wire representation of a reviewer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewerDto {
    #[serde(default)]
    pub id: DbId,
    #[validate(custom(function = "validate_not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub last_name: String,
}

impl From<Reviewer> for ReviewerDto {
    fn from(reviewer: Reviewer) -> Self {
        Self {
            id: reviewer.id,
            first_name: reviewer.first_name,
            last_name: reviewer.last_name,
        }
    }
}

impl From<ReviewerDto> for Reviewer {
    fn from(dto: ReviewerDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
