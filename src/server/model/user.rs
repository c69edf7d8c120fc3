//! User domain models and parameters.
//!
//! A single user record serves both account kinds. What distinguishes a client from a
//! fournisseur (supplier) is the `Role` assigned at registration.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{RegisterUserDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Account kind, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Buyer account.
    Client,
    /// Supplier account.
    Fournisseur,
}

impl Role {
    /// Tag stored in the `role` column and exposed in the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Fournisseur => "fournisseur",
        }
    }

    /// Parses a stored role tag.
    pub fn from_tag(value: &str) -> Option<Self> {
        match value {
            "client" => Some(Self::Client),
            "fournisseur" => Some(Self::Fournisseur),
            _ => None,
        }
    }
}

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    pub phone: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role tag is not recognised
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::from_tag(&entity.role).ok_or_else(|| InternalError::UnknownRole {
            user_id: entity.id,
            value: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            phone: entity.phone,
            role,
            created_at: entity.created_at,
        })
    }

    /// Converts the user to a DTO for API responses; the password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }
}

/// Registration input as received from the client.
///
/// The password is still in plaintext here; it is hashed by the auth service.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl RegisterUserParams {
    /// Converts the registration DTO, trimming whitespace and lowercasing the email.
    ///
    /// The password is kept verbatim.
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
            phone: dto.phone.trim().to_string(),
        }
    }
}

/// Row to insert for a new user, password already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub role: Role,
}

/// Canonical form of an email used for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
