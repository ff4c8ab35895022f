//! Auth DTOs - Data Transfer Objects per login e registrazione

use crate::entities::{User, UserRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct LoginDTO {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct RegisterDTO {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
}

impl RegisterDTO {
    /// La password resta in chiaro: la hasha il service prima del create
    pub fn to_entity(&self) -> User {
        User {
            id: 0,
            name: self.name.to_uppercase(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: UserRole::User,
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenDTO {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CurrentUserDTO {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for CurrentUserDTO {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            role: value.role,
        }
    }
}
