use super::*;

/// Tests the first review of a product.
///
/// Verifies that the review is stored and the aggregate becomes the review's rating.
///
/// Expected: Added, rating 4.0, num_reviews 1
#[tokio::test]
async fn adds_first_review_and_sets_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;

    let repo = ProductReviewRepository::new(db);
    let outcome = repo.add_review(review_params(product.id, user.id, 4)).await?;

    let AddReviewOutcome::Added(review) = outcome else {
        panic!("Expected Added, got {:?}", outcome);
    };
    assert_eq!(review.product_id, product.id);
    assert_eq!(review.user_id, user.id);
    assert_eq!(review.rating, 4);
    assert_eq!(review.comment, "Solid");

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.num_reviews, 1);
    assert_eq!(stored.rating, 4.0);

    Ok(())
}

/// Tests the aggregate is the arithmetic mean over all reviews.
///
/// Expected: rating (5 + 2 + 2) / 3, num_reviews 3
#[tokio::test]
async fn recomputes_mean_over_all_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _) = factory::helpers::create_reviewed_product(db, &[5, 2]).await?;
    let user = factory::user::create_user(db).await?;

    let repo = ProductReviewRepository::new(db);
    let outcome = repo.add_review(review_params(product.id, user.id, 2)).await?;
    assert!(matches!(outcome, AddReviewOutcome::Added(_)));

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.num_reviews, 3);
    assert!((stored.rating - 3.0).abs() < f64::EPSILON);

    Ok(())
}

/// Tests a second review by the same user is refused without side effects.
///
/// Expected: AlreadyReviewed, one review row, aggregate unchanged
#[tokio::test]
async fn refuses_second_review_from_same_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;

    let repo = ProductReviewRepository::new(db);
    repo.add_review(review_params(product.id, user.id, 5)).await?;

    let outcome = repo.add_review(review_params(product.id, user.id, 1)).await?;
    assert_eq!(outcome, AddReviewOutcome::AlreadyReviewed);

    let review_count = entity::prelude::ProductReview::find()
        .filter(entity::product_review::Column::ProductId.eq(product.id))
        .count(db)
        .await?;
    assert_eq!(review_count, 1);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.num_reviews, 1);
    assert_eq!(stored.rating, 5.0);

    Ok(())
}

/// Tests the same user may review different products.
///
/// Expected: Added for both products
#[tokio::test]
async fn allows_same_user_on_different_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::product::create_product(db).await?;
    let second = factory::product::create_product(db).await?;

    let repo = ProductReviewRepository::new(db);
    let a = repo.add_review(review_params(first.id, user.id, 3)).await?;
    let b = repo.add_review(review_params(second.id, user.id, 4)).await?;

    assert!(matches!(a, AddReviewOutcome::Added(_)));
    assert!(matches!(b, AddReviewOutcome::Added(_)));

    Ok(())
}

/// Tests reviewing a product that does not exist.
///
/// Expected: ProductNotFound and no review row
#[tokio::test]
async fn reports_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = ProductReviewRepository::new(db);
    let outcome = repo.add_review(review_params(999, user.id, 3)).await?;

    assert_eq!(outcome, AddReviewOutcome::ProductNotFound);
    assert_eq!(entity::prelude::ProductReview::find().count(db).await?, 0);

    Ok(())
}

/// Tests the unique index on `(product_id, user_id)`.
///
/// Inserts a duplicate review row directly, bypassing the repository, as a
/// concurrent submission would.
///
/// Expected: Err(DbErr) recognised by `is_unique_violation`
#[tokio::test]
async fn duplicate_review_row_violates_unique_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;

    factory::product_review::ProductReviewFactory::new(db, product.id, user.id)
        .build()
        .await?;
    let result = factory::product_review::ProductReviewFactory::new(db, product.id, user.id)
        .rating(1)
        .build()
        .await;

    let err = result.expect_err("duplicate review must be rejected");
    assert!(is_unique_violation(&err), "Unexpected error: {:?}", err);

    Ok(())
}

/// Tests a review whose row already exists is reported as already reviewed.
///
/// The existing row is inserted directly, so only the unique index can detect it.
///
/// Expected: AlreadyReviewed and the aggregate columns untouched
#[tokio::test]
async fn existing_row_maps_to_already_reviewed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::create_product(db).await?;
    factory::product_review::ProductReviewFactory::new(db, product.id, user.id)
        .build()
        .await?;

    let repo = ProductReviewRepository::new(db);
    let outcome = repo.add_review(review_params(product.id, user.id, 2)).await?;
    assert_eq!(outcome, AddReviewOutcome::AlreadyReviewed);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.num_reviews, product.num_reviews);
    assert_eq!(stored.rating, product.rating);

    Ok(())
}
