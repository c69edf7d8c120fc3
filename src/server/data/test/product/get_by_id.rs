use super::*;

/// Tests getting a product with its reviews.
///
/// Expected: Ok(Some((product, reviews)))
#[tokio::test]
async fn gets_product_with_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, reviews) = factory::helpers::create_reviewed_product(db, &[5, 1]).await?;
    // Reviews of another product must not leak in
    factory::helpers::create_reviewed_product(db, &[2]).await?;

    let repo = ProductRepository::new(db);
    let (found, found_reviews) = repo.get_by_id(product.id).await?.unwrap();

    assert_eq!(found, product);
    assert_eq!(found_reviews, reviews);

    Ok(())
}

/// Tests getting a product that does not exist.
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
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
