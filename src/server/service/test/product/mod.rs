use crate::server::{
    error::AppError,
    model::product::{CreateProductParams, CreateReviewParams, ImageUpload, UpdateProductParams},
    service::{product::ProductService, upload::MAX_UPLOAD_BYTES},
};
use std::path::Path;
use test_utils::{builder::TestBuilder, factory};

mod create_with_image;
mod delete;
mod update;

fn product_params(name: &str, price: f64) -> CreateProductParams {
    CreateProductParams {
        name: name.to_string(),
        price,
        description: "Hand made".to_string(),
        category: "Home".to_string(),
        image: None,
    }
}

fn png_upload() -> ImageUpload {
    ImageUpload {
        content_type: Some("image/png".to_string()),
        bytes: vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a],
    }
}

/// Number of files in `dir`.
fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
