//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships so tests only
//! spell out the fields they actually assert on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let product = factory::product::create_product(&db).await?;
//!
//!     // Create a product that already carries reviews
//!     let (product, reviews) =
//!         factory::helpers::create_reviewed_product(&db, &[4, 5]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let supplier = factory::user::UserFactory::new(&db)
//!     .email("supplier@example.com")
//!     .role("fournisseur")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `product` - Create product entities
//! - `product_review` - Create review entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod product;
pub mod product_review;
pub mod user;

pub use product::create_product;
pub use product_review::create_review;
pub use user::create_user;
