//! Category entity model and DTO.

use pokedex_core::naming::validate_not_blank;
use pokedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}

/// Wire representation of a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: DbId,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
