//! User DTOs - Data Transfer Objects per utenti

use crate::dtos::validate_optional_email;
use crate::entities::{User, UserRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rappresentazione pubblica dell'utente: la password non esce mai
#[derive(Serialize, Deserialize, Debug)]
pub struct UserDTO {
    pub name: String,
    pub email: String,
}

impl From<User> for UserDTO {
    fn from(value: User) -> Self {
        Self {
            name: value.name,
            email: value.email,
        }
    }
}

/// DTO per creare un nuovo utente (endpoint amministrativo)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateUserDTO {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

impl CreateUserDTO {
    pub fn to_entity(&self) -> User {
        User {
            id: 0,
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: UserRole::User,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

/// DTO per l'update parziale: i campi non inviati restano al valore zero
/// e il merge li lascia com'erano.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateUserDTO {
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: String,
}

impl UpdateUserDTO {
    /// Entità a forma di richiesta per il merge: l'id viene dal path, il
    /// ruolo è un segnaposto che il merge non consulta mai.
    pub fn to_entity(&self, id: i32) -> User {
        User {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            password: String::new(),
            role: UserRole::User,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}
