use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `client` or `fournisseur`
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Registration payload shared by clients and fournisseurs.
///
/// Every field defaults to empty so that missing fields reach validation and
/// are reported as a 400 with a readable message.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct RegisterUserDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct LoginDto {
    /// Account email
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct AuthResponseDto {
    pub message: String,
    pub user: UserDto,
}
