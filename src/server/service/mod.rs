//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository)
//! layer. Services are responsible for:
//!
//! - **Validation**: Rejecting input that breaks business rules with `AppError::BadRequest`
//! - **Orchestration**: Coordinating repository calls with password hashing and file storage
//! - **Domain Models**: Returning domain models rather than DTOs or entity models

pub mod auth;
pub mod product;
pub mod upload;

#[cfg(test)]
mod test;
