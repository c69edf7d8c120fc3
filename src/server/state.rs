//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Upload directory for product images
//! - bcrypt cost used when hashing new passwords

use sea_orm::DatabaseConnection;
use std::path::PathBuf;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool
/// whose clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Directory where uploaded product images are stored.
    pub upload_dir: PathBuf,

    /// Work factor for bcrypt password hashing.
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `upload_dir` - Directory for uploaded product images
    /// - `bcrypt_cost` - bcrypt work factor for new password hashes
    pub fn new(db: DatabaseConnection, upload_dir: PathBuf, bcrypt_cost: u32) -> Self {
        Self {
            db,
            upload_dir,
            bcrypt_cost,
        }
    }
}
