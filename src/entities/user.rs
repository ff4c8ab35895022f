//! User entity - Entità utente con metodi per gestione password

use super::enums::UserRole;
use crate::core::differ::{Differ, merged};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with default cost
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, DEFAULT_COST)
    }
}

impl Differ for User {
    fn merge_from(&self, patch: &Self) -> Self {
        Self {
            id: self.id,
            name: merged(&self.name, &patch.name),
            email: merged(&self.email, &patch.email),
            password: merged(&self.password, &patch.password),
            // il ruolo non fa parte della forma aggiornabile via API
            role: self.role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
