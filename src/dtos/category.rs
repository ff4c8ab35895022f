//! Category DTOs - Data Transfer Objects per categorie

use crate::entities::Category;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug)]
pub struct CategoryDTO {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryDTO {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateCategoryDTO {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
}

impl CreateCategoryDTO {
    /// Il nome viene normalizzato in maiuscolo solo alla creazione
    pub fn to_entity(&self) -> Category {
        Category {
            id: 0,
            name: self.name.to_uppercase(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateCategoryDTO {
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: String,
}

impl UpdateCategoryDTO {
    pub fn to_entity(&self, id: i32) -> Category {
        Category {
            id,
            name: self.name.clone(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}
