//! Publisher entity - Entità editore

use crate::core::differ::{Differ, merged};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Differ for Publisher {
    fn merge_from(&self, patch: &Self) -> Self {
        Self {
            id: self.id,
            name: merged(&self.name, &patch.name),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
