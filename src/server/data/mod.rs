//! Database repository layer for all domain entities.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They take parameter models from the service layer and return SeaORM entity models,
//! leaving the conversion to domain models to the services.

pub mod product;
pub mod product_review;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Whether `err` was raised by a unique index or unique column rejecting a write.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod test;
