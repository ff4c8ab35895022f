//! Publisher DTOs - Data Transfer Objects per editori

use crate::entities::Publisher;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug)]
pub struct PublisherDTO {
    pub id: i32,
    pub name: String,
}

impl From<Publisher> for PublisherDTO {
    fn from(value: Publisher) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreatePublisherDTO {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
}

impl CreatePublisherDTO {
    /// Il nome viene normalizzato in maiuscolo solo alla creazione
    pub fn to_entity(&self) -> Publisher {
        Publisher {
            id: 0,
            name: self.name.to_uppercase(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdatePublisherDTO {
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: String,
}

impl UpdatePublisherDTO {
    pub fn to_entity(&self, id: i32) -> Publisher {
        Publisher {
            id,
            name: self.name.clone(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}
