//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a product and one review per entry in `ratings`, each by a fresh user.
///
/// The product's `rating` and `num_reviews` columns are written to match the inserted
/// reviews, so the result looks like a product that went through review submission.
///
/// # Arguments
/// - `db` - Database connection
/// - `ratings` - Rating of each review to create
///
/// # Returns
/// - `Ok((product, reviews))` - Created product and its reviews
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reviewed_product(
    db: &DatabaseConnection,
    ratings: &[i32],
) -> Result<(entity::product::Model, Vec<entity::product_review::Model>), DbErr> {
    let mean = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<i32>() as f64 / ratings.len() as f64
    };

    let product = crate::factory::product::ProductFactory::new(db)
        .rating(mean)
        .num_reviews(ratings.len() as i32)
        .build()
        .await?;

    let mut reviews = Vec::with_capacity(ratings.len());
    for rating in ratings {
        let user = crate::factory::user::create_user(db).await?;
        let review = crate::factory::product_review::ProductReviewFactory::new(db, product.id, user.id)
            .rating(*rating)
            .build()
            .await?;
        reviews.push(review);
    }

    Ok((product, reviews))
}
