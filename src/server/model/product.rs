//! Product and review domain models and parameters.
//!
//! Reviews are owned by their product: they are loaded with it, returned inside its
//! DTO, and removed with it. The product keeps a denormalised aggregate (`rating`,
//! `num_reviews`) that is recomputed whenever a review is added.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{CreateProductDto, CreateReviewDto, ProductDto, ReviewDto, UpdateProductDto},
    server::model::user::User,
};

/// Lowest accepted review rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted review rating.
pub const MAX_RATING: i32 = 5;

/// Product with its reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: Option<String>,
    /// Mean of all review ratings, 0 without reviews.
    pub rating: f64,
    pub num_reviews: i32,
    pub reviews: Vec<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Converts a product entity and its review entities to a domain model.
    ///
    /// Reviews are ordered oldest first.
    pub fn from_entity(
        entity: entity::product::Model,
        reviews: Vec<entity::product_review::Model>,
    ) -> Self {
        let mut reviews: Vec<Review> = reviews.into_iter().map(Review::from_entity).collect();
        reviews.sort_by_key(|r| (r.created_at, r.id));

        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            description: entity.description,
            category: entity.category,
            image: entity.image,
            rating: entity.rating,
            num_reviews: entity.num_reviews,
            reviews,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            price: self.price,
            description: self.description,
            category: self.category,
            image: self.image,
            rating: self.rating,
            num_reviews: self.num_reviews,
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A user's rating and comment on a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub user_id: i32,
    /// Reviewer display name at submission time.
    pub name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn from_entity(entity: entity::product_review::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            user_id: entity.user_id,
            name: entity.name,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user: self.user_id,
            name: self.name,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Public path of an already stored image.
    pub image: Option<String>,
}

impl CreateProductParams {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            price: dto.price,
            description: dto.description,
            category: dto.category.trim().to_string(),
            image: None,
        }
    }
}

/// Parameters for updating a product's editable fields.
///
/// `None` for `description` or `category` keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdateProductParams {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl UpdateProductParams {
    pub fn from_dto(id: i32, dto: UpdateProductDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            price: dto.price,
            description: dto.description,
            category: dto.category.map(|c| c.trim().to_string()),
        }
    }
}

/// Parameters for adding a review to a product.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub product_id: i32,
    pub user_id: i32,
    /// Reviewer display name, copied from the user.
    pub name: String,
    pub rating: i32,
    pub comment: String,
}

impl CreateReviewParams {
    /// Builds review parameters for `product_id` written by `user`.
    pub fn from_dto(product_id: i32, user: &User, dto: CreateReviewDto) -> Self {
        Self {
            product_id,
            user_id: user.id,
            name: user.name.clone(),
            rating: dto.rating,
            comment: dto.comment.trim().to_string(),
        }
    }
}

/// Image file received in a multipart request, not yet stored.
///
/// The client's file name is not kept; the stored name is generated.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Result of an attempt to insert a review.
#[derive(Debug, Clone, PartialEq)]
pub enum AddReviewOutcome {
    /// Review stored and product aggregate recomputed.
    Added(Review),
    /// No product with the requested id.
    ProductNotFound,
    /// The user already reviewed this product; nothing was written.
    AlreadyReviewed,
}

/// Arithmetic mean of `ratings`, 0 for an empty slice.
pub fn mean_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    ratings.iter().map(|r| *r as f64).sum::<f64>() / ratings.len() as f64
}
