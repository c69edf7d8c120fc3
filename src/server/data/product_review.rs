//! Review data repository.
//!
//! Review insertion is the only write that touches two tables: the review row and the
//! product's `rating`/`num_reviews` aggregate. Both happen in one transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::{
    data::is_unique_violation,
    model::product::{mean_rating, AddReviewOutcome, CreateReviewParams, Review},
};

pub struct ProductReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a review and recomputes the product's aggregate rating.
    ///
    /// Inside a single transaction: checks the product exists, inserts the review, then
    /// sets `num_reviews` to the number of reviews and `rating` to their arithmetic mean.
    /// A second review by the same user is rejected by the unique
    /// `(product_id, user_id)` index. When the product is missing or already reviewed
    /// the transaction is dropped without writing anything.
    ///
    /// # Arguments
    /// - `params` - Product, reviewer and review content
    ///
    /// # Returns
    /// - `Ok(AddReviewOutcome::Added(review))` - Review stored, aggregate updated
    /// - `Ok(AddReviewOutcome::ProductNotFound)` - No product with that id
    /// - `Ok(AddReviewOutcome::AlreadyReviewed)` - The user already reviewed the product
    /// - `Err(DbErr)` - Database error, nothing written
    pub async fn add_review(&self, params: CreateReviewParams) -> Result<AddReviewOutcome, DbErr> {
        let txn = self.db.begin().await?;

        let Some(product) = entity::prelude::Product::find_by_id(params.product_id)
            .one(&txn)
            .await?
        else {
            return Ok(AddReviewOutcome::ProductNotFound);
        };

        let now = Utc::now();
        let inserted = entity::product_review::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        // The unique (product_id, user_id) index decides duplicates, including two
        // concurrent submissions by the same user.
        let review = match inserted {
            Ok(review) => review,
            Err(err) if is_unique_violation(&err) => {
                return Ok(AddReviewOutcome::AlreadyReviewed);
            }
            Err(err) => return Err(err),
        };

        let ratings: Vec<i32> = entity::prelude::ProductReview::find()
            .filter(entity::product_review::Column::ProductId.eq(params.product_id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|r| r.rating)
            .collect();

        let mut active: entity::product::ActiveModel = product.into();
        active.rating = ActiveValue::Set(mean_rating(&ratings));
        active.num_reviews = ActiveValue::Set(ratings.len() as i32);
        active.updated_at = ActiveValue::Set(now);
        active.update(&txn).await?;

        txn.commit().await?;

        Ok(AddReviewOutcome::Added(Review::from_entity(review)))
    }
}
