use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the request session.
    #[error("No user found in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Unknown account or wrong password on login.
    ///
    /// Both cases share one variant so responses never reveal which accounts exist.
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Unauthorized"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => "Unauthorized",
            Self::InvalidCredentials(_) => "Invalid email or password",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
