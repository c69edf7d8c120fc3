//! SeaORM entity definitions for the storefront schema.

pub mod prelude;

pub mod product;
pub mod product_review;
pub mod user;
