use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthResponseDto, LoginDto, RegisterUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthUser, session::AuthSession},
        model::user::{RegisterUserParams, Role},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a client account.
///
/// Creates a buyer account. The password is stored as a bcrypt hash. Registering
/// does not log the user in.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Name, email, password and phone
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing field or malformed email
/// - `409 Conflict` - Email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Client added", body = AuthResponseDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_client(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    register(&state, payload, Role::Client, "Client added successfully!").await
}

/// Register a fournisseur (supplier) account.
///
/// Same contract as client registration, with the `fournisseur` role.
#[utoipa::path(
    post,
    path = "/api/auth/register/fournisseur",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Fournisseur added", body = AuthResponseDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_fournisseur(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    register(
        &state,
        payload,
        Role::Fournisseur,
        "Fournisseur added successfully!",
    )
    .await
}

async fn register(
    state: &AppState,
    payload: RegisterUserDto,
    role: Role,
    message: &str,
) -> Result<(StatusCode, Json<AuthResponseDto>), AppError> {
    let service = AuthService::new(&state.db, state.bcrypt_cost);

    let user = service
        .register(RegisterUserParams::from_dto(payload), role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            message: message.to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// On success the user id is stored in a fresh session and the session cookie is
/// returned with the response.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, state.bcrypt_cost);

    let user = service.login(&payload.username, payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!(user_id = user.id, "User logged in");

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            message: "Logged in successfully".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log out and discard the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in user.
///
/// # Returns
/// - `200 OK` - The user attached to the session
/// - `401 Unauthorized` - No user logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged-in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(AuthUser(user): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(user.into_dto())))
}
