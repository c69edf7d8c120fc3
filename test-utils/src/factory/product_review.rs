//! Review factory for creating test product review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews for an existing product and user.
///
/// Inserting a review through the factory does not touch the product's
/// aggregate columns; use `helpers::create_reviewed_product` for a consistent
/// product and review set.
pub struct ProductReviewFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    user_id: i32,
    name: String,
    rating: i32,
    comment: String,
}

impl<'a> ProductReviewFactory<'a> {
    /// Creates a new ProductReviewFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Reviewer {user_id}"`
    /// - rating: `5`
    /// - comment: `"Great product"`
    pub fn new(db: &'a DatabaseConnection, product_id: i32, user_id: i32) -> Self {
        Self {
            db,
            product_id,
            user_id,
            name: format!("Reviewer {}", user_id),
            rating: 5,
            comment: "Great product".to_string(),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::product_review::Model, DbErr> {
        entity::product_review::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 5 star review of `product_id` by `user_id`.
pub async fn create_review(
    db: &DatabaseConnection,
    product_id: i32,
    user_id: i32,
) -> Result<entity::product_review::Model, DbErr> {
    ProductReviewFactory::new(db, product_id, user_id)
        .build()
        .await
}
