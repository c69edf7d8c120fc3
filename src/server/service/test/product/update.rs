use super::*;

/// Tests updating a product.
///
/// Expected: Ok(Some(Product)) with new fields and reviews preserved
#[tokio::test]
async fn updates_fields_and_keeps_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let (product, _) = factory::helpers::create_reviewed_product(db, &[5]).await?;

    let service = ProductService::new(db, upload_dir.path());
    let updated = service
        .update(UpdateProductParams {
            id: product.id,
            name: "Renamed".to_string(),
            price: 42.0,
            description: Some("New description".to_string()),
            category: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.price, 42.0);
    assert_eq!(updated.description, "New description");
    assert_eq!(updated.category, product.category);
    assert_eq!(updated.reviews.len(), 1);
    assert_eq!(updated.num_reviews, 1);

    let fetched = service.get_by_id(product.id).await?.unwrap();
    assert_eq!(fetched, updated);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let service = ProductService::new(db, upload_dir.path());
    let result = service
        .update(UpdateProductParams {
            id: 999,
            name: "Ghost".to_string(),
            price: 1.0,
            description: None,
            category: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that update validates the price.
///
/// Expected: Err(AppError::BadRequest), stored product unchanged
#[tokio::test]
async fn rejects_negative_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let product = factory::product::create_product(db).await?;

    let service = ProductService::new(db, upload_dir.path());
    let result = service
        .update(UpdateProductParams {
            id: product.id,
            name: "Cheap".to_string(),
            price: -5.0,
            description: None,
            category: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let fetched = service.get_by_id(product.id).await?.unwrap();
    assert_eq!(fetched.price, product.price);

    Ok(())
}
