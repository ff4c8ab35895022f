//! Author entity - Entità autore

use crate::core::differ::{Differ, merged};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Differ for Author {
    fn merge_from(&self, patch: &Self) -> Self {
        Self {
            id: self.id,
            first_name: merged(&self.first_name, &patch.first_name),
            last_name: merged(&self.last_name, &patch.last_name),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
