use super::*;

/// Tests creating a product with an uploaded image.
///
/// Expected: the image is written to the upload directory and its public path stored
#[tokio::test]
async fn stores_image_and_path() -> Result<(), AppError> {
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

    let image = product.image.unwrap();
    assert!(image.starts_with("/uploads/"));
    assert!(image.ends_with(".png"));

    let file_name = image.trim_start_matches("/uploads/");
    let stored = std::fs::read(upload_dir.path().join(file_name)).unwrap();
    assert_eq!(stored, png_upload().bytes);

    Ok(())
}

/// Tests that a non-image upload is refused without writing anything.
///
/// Expected: Err(AppError::BadRequest), no file and no product
#[tokio::test]
async fn rejects_non_image_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let service = ProductService::new(db, upload_dir.path());
    let upload = ImageUpload {
        content_type: Some("text/plain".to_string()),
        bytes: b"hello".to_vec(),
    };

    let result = service
        .create_with_image(product_params("Mug", 9.5), upload)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(file_count(upload_dir.path()), 0);
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests that invalid fields are refused before the image is stored.
///
/// Expected: Err(AppError::BadRequest) and an empty upload directory
#[tokio::test]
async fn validates_fields_before_storing_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let service = ProductService::new(db, upload_dir.path());
    let result = service
        .create_with_image(product_params("", 9.5), png_upload())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(file_count(upload_dir.path()), 0);

    Ok(())
}

/// Tests that markup declared as an image is refused.
///
/// Expected: Err(AppError::BadRequest) and an empty upload directory
#[tokio::test]
async fn rejects_markup_declared_as_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let service = ProductService::new(db, upload_dir.path());
    for (content_type, bytes) in [
        ("image/png", &b"<html><script>alert(1)</script></html>"[..]),
        ("image/svg+xml", &b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>"[..]),
    ] {
        let upload = ImageUpload {
            content_type: Some(content_type.to_string()),
            bytes: bytes.to_vec(),
        };

        let result = service
            .create_with_image(product_params("Mug", 9.5), upload)
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert!(msg.starts_with("Unsupported image format")),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    assert_eq!(file_count(upload_dir.path()), 0);
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests the stored extension follows the file signature, not the declared type.
///
/// Expected: a JPEG sent as image/png is stored with a `.jpg` extension
#[tokio::test]
async fn extension_follows_file_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let service = ProductService::new(db, upload_dir.path());
    let upload = ImageUpload {
        content_type: Some("image/png".to_string()),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10],
    };

    let product = service
        .create_with_image(product_params("Mug", 9.5), upload)
        .await?;

    assert!(product.image.unwrap().ends_with(".jpg"));

    Ok(())
}

/// Tests the size limit on stored images.
///
/// Expected: Err(AppError::BadRequest), no file and no product
#[tokio::test]
async fn rejects_image_over_size_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let upload_dir = tempfile::tempdir().unwrap();

    let service = ProductService::new(db, upload_dir.path());
    let upload = ImageUpload {
        content_type: Some("image/png".to_string()),
        bytes: vec![0; MAX_UPLOAD_BYTES + 1],
    };

    let result = service
        .create_with_image(product_params("Mug", 9.5), upload)
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("exceeds")),
        other => panic!("expected BadRequest, got {:?}", other),
    }
    assert_eq!(file_count(upload_dir.path()), 0);
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
