use super::*;

/// Tests deleting a product with an image.
///
/// Expected: Ok(true), product gone and image file removed
#[tokio::test]
async fn deletes_product_and_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let service = ProductService::new(db, upload_dir.path());
    let product = service
        .create_with_image(product_params("Mug", 9.5), png_upload())
        .await?;
    assert_eq!(file_count(upload_dir.path()), 1);

    assert!(service.delete(product.id).await?);

    assert!(service.get_by_id(product.id).await?.is_none());
    assert_eq!(file_count(upload_dir.path()), 0);

    Ok(())
}

/// Tests deleting a product that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let service = ProductService::new(db, upload_dir.path());

    assert!(!service.delete(999).await?);

    Ok(())
}
