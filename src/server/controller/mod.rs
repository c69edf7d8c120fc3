//! HTTP handlers.
//!
//! Handlers extract the request, convert DTOs into server parameters, call a service
//! and convert the resulting domain model back into a DTO.

pub mod auth;
pub mod product;

#[cfg(test)]
mod test;
