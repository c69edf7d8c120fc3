use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    /// Id of the reviewing user
    pub user: i32,
    pub name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Public path of the product image, if one was uploaded
    pub image: Option<String>,
    pub rating: f64,
    pub num_reviews: i32,
    pub reviews: Vec<ReviewDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateProductDto {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

/// Multipart form accepted by `POST /api/products/create`.
///
/// Only used to document the request body; the handler reads the parts directly.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadProductForm {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// Full replacement of the editable product fields.
///
/// `description` and `category` keep their stored value when omitted.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateProductDto {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateReviewDto {
    /// Between 1 and 5 inclusive
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ProductCreatedDto {
    pub message: String,
    pub product: ProductDto,
}
