//! Author DTOs - Data Transfer Objects per autori
//!
//! I nomi degli autori vivono in maiuscolo, sia in scrittura che in
//! lettura.

use crate::entities::Author;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthorDTO {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<Author> for AuthorDTO {
    fn from(value: Author) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name.to_uppercase(),
            last_name: value.last_name.to_uppercase(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateAuthorDTO {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub last_name: String,
}

impl CreateAuthorDTO {
    pub fn to_entity(&self) -> Author {
        Author {
            id: 0,
            first_name: self.first_name.to_uppercase(),
            last_name: self.last_name.to_uppercase(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateAuthorDTO {
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub last_name: String,
}

impl UpdateAuthorDTO {
    pub fn to_entity(&self, id: i32) -> Author {
        Author {
            id,
            first_name: self.first_name.to_uppercase(),
            last_name: self.last_name.to_uppercase(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}
