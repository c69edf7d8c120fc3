//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the service boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input
//! of a single operation from the controller down to the repositories.

pub mod product;
pub mod user;
