use super::*;

/// Tests deleting a product removes its reviews too.
///
/// Expected: Ok(Some(product)), no product or review rows left for it
#[tokio::test]
async fn deletes_product_and_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _) = factory::helpers::create_reviewed_product(db, &[3, 5]).await?;
    let (other, _) = factory::helpers::create_reviewed_product(db, &[1]).await?;

    let repo = ProductRepository::new(db);
    let deleted = repo.delete(product.id).await?;

    assert_eq!(deleted.map(|p| p.id), Some(product.id));
    assert!(entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .is_none());

    let remaining_reviews = entity::prelude::ProductReview::find()
        .filter(entity::product_review::Column::ProductId.eq(product.id))
        .count(db)
        .await?;
    assert_eq!(remaining_reviews, 0);

    // Other products keep their reviews
    let other_reviews = entity::prelude::ProductReview::find()
        .filter(entity::product_review::Column::ProductId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(other_reviews, 1);

    Ok(())
}

/// Tests deleting a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(deleted.is_none());

    Ok(())
}
