use sea_orm::DatabaseConnection;
use std::path::Path;

use crate::server::{
    data::{product::ProductRepository, product_review::ProductReviewRepository},
    error::AppError,
    model::product::{
        AddReviewOutcome, CreateProductParams, CreateReviewParams, ImageUpload, Product, Review,
        UpdateProductParams, MAX_RATING, MIN_RATING,
    },
    service::upload::ImageStore,
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
    images: ImageStore<'a>,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self {
            db,
            images: ImageStore::new(upload_dir),
        }
    }

    /// Gets all products with their reviews, ordered by id
    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        let products = repo
            .get_all()
            .await?
            .into_iter()
            .map(|(product, reviews)| Product::from_entity(product, reviews))
            .collect();

        Ok(products)
    }

    /// Gets a product with its reviews
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        let product = repo
            .get_by_id(id)
            .await?
            .map(|(product, reviews)| Product::from_entity(product, reviews));

        Ok(product)
    }

    /// Creates a product from JSON fields
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        validate_product_fields(&params.name, params.price)?;

        let repo = ProductRepository::new(self.db);
        let product = repo.create(params).await?;

        tracing::info!(product_id = product.id, "Created product");

        Ok(Product::from_entity(product, Vec::new()))
    }

    /// Creates a product and stores its image.
    ///
    /// Fields are validated before the image is written; the stored image is removed
    /// again if the insert fails.
    pub async fn create_with_image(
        &self,
        mut params: CreateProductParams,
        image: ImageUpload,
    ) -> Result<Product, AppError> {
        validate_product_fields(&params.name, params.price)?;

        let image_path = self.images.save(image).await?;
        params.image = Some(image_path.clone());

        let repo = ProductRepository::new(self.db);
        let product = match repo.create(params).await {
            Ok(product) => product,
            Err(err) => {
                self.images.remove(&image_path).await;
                return Err(err.into());
            }
        };

        tracing::info!(product_id = product.id, image = %image_path, "Created product");

        Ok(Product::from_entity(product, Vec::new()))
    }

    /// Updates the editable fields of a product
    ///
    /// Returns `None` when the product does not exist.
    pub async fn update(&self, params: UpdateProductParams) -> Result<Option<Product>, AppError> {
        validate_product_fields(&params.name, params.price)?;

        let repo = ProductRepository::new(self.db);

        let Some(updated) = repo.update(params).await? else {
            return Ok(None);
        };

        // Fetch full product with reviews
        let full_result = repo
            .get_by_id(updated.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Product missing after update".to_string()))?;

        Ok(Some(Product::from_entity(full_result.0, full_result.1)))
    }

    /// Deletes a product, its reviews and its image file
    ///
    /// Returns `false` when the product does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(deleted) = repo.delete(id).await? else {
            return Ok(false);
        };

        if let Some(image) = deleted.image {
            self.images.remove(&image).await;
        }

        tracing::info!(product_id = id, "Deleted product");

        Ok(true)
    }

    /// Adds a review and recomputes the product's rating aggregate.
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5, or the user already reviewed the product
    /// - `Err(AppError::NotFound)` - The product does not exist
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    pub async fn add_review(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        if !(MIN_RATING..=MAX_RATING).contains(&params.rating) {
            return Err(AppError::BadRequest(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }

        let repo = ProductReviewRepository::new(self.db);

        match repo.add_review(params).await? {
            AddReviewOutcome::Added(review) => {
                tracing::info!(
                    product_id = review.product_id,
                    user_id = review.user_id,
                    rating = review.rating,
                    "Added product review"
                );
                Ok(review)
            }
            AddReviewOutcome::ProductNotFound => {
                Err(AppError::NotFound("Product not found".to_string()))
            }
            AddReviewOutcome::AlreadyReviewed => {
                Err(AppError::BadRequest("Product already reviewed".to_string()))
            }
        }
    }
}

fn validate_product_fields(name: &str, price: f64) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Product name is required".to_string()));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest(
            "Price must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}
