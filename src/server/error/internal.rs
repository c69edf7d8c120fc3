use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored user row carries a role tag this build does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown user role '{value}' stored for user {user_id}")]
    UnknownRole {
        /// Id of the user row
        user_id: i32,
        /// The stored role string
        value: String,
    },
}
