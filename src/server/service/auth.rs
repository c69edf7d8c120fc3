//! Account registration and credential checks.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{normalize_email, CreateUserParams, RegisterUserParams, Role, User},
};

/// Service providing registration and login for both account kinds.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `bcrypt_cost` - Work factor used when hashing new passwords
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Registers a new account with the given role.
    ///
    /// Validates the input, refuses an email that is already registered, hashes the
    /// password with bcrypt and stores the user.
    ///
    /// # Arguments
    /// - `params` - Registration fields, password still in plaintext
    /// - `role` - Role assigned to the new account
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::BadRequest)` - A field is missing or the email is malformed
    /// - `Err(AppError::Conflict)` - The email is already registered
    /// - `Err(AppError::HashErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn register(&self, params: RegisterUserParams, role: Role) -> Result<User, AppError> {
        validate_registration(&params)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(params.password, self.bcrypt_cost).await?;

        // A concurrent registration can pass the lookup above; the unique email
        // column settles it.
        let user = user_repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
                phone: params.phone,
                role,
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AppError::Conflict("Email already registered".to_string())
                } else {
                    err.into()
                }
            })?;

        tracing::info!(user_id = user.id, role = role.as_str(), "Registered new account");

        User::from_entity(user)
    }

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match a stored account
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::HashErr)` - The stored hash could not be parsed
    pub async fn login(&self, email: &str, password: String) -> Result<User, AppError> {
        let email = normalize_email(email);
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials(email).into());
        };
        let user = User::from_entity(user)?;

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials(email).into());
        }

        Ok(user)
    }
}

fn validate_registration(params: &RegisterUserParams) -> Result<(), AppError> {
    let required = [
        ("name", &params.name),
        ("email", &params.email),
        ("password", &params.password),
        ("phone", &params.phone),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("Field '{}' is required", field)));
        }
    }

    if !is_plausible_email(&params.email) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    Ok(())
}

/// `local@domain` with non-empty parts and no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

// Hashing runs on the blocking pool.
async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(matches)
}
