//! Request and response DTOs shared by the HTTP API.
//!
//! These types define the JSON wire format. They carry no behaviour; server-side
//! domain models convert to and from them at the controller boundary.

pub mod api;
pub mod product;
pub mod user;
