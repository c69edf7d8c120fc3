use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        product::{
            CreateProductDto, CreateReviewDto, ProductCreatedDto, ProductDto, UpdateProductDto,
            UploadProductForm,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::product::{
            CreateProductParams, CreateReviewParams, ImageUpload, Product, UpdateProductParams,
        },
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Get all products.
///
/// Returns every product with its reviews, ordered by id.
///
/// # Returns
/// - `200 OK` - List of products
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "All products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.upload_dir);

    let products: Vec<ProductDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Product::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(products)))
}

/// Create a product from a JSON body.
///
/// # Returns
/// - `201 Created` - Product created, without image
/// - `400 Bad Request` - Blank name or invalid price
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductCreatedDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.upload_dir);

    let product = service
        .create(CreateProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product_created(product))))
}

/// Create a product with an image from a multipart form.
///
/// Expects the parts `name`, `price`, `image` and optionally `description` and
/// `category`. Unknown parts are ignored. The image is stored in the upload directory
/// and served back under `/uploads`.
///
/// # Returns
/// - `201 Created` - Product created with its image path
/// - `400 Bad Request` - Missing part, invalid price, or the image is not a JPEG, PNG,
///   GIF or WebP file
/// - `413 Payload Too Large` - Body exceeds the upload limit
/// - `500 Internal Server Error` - Database or filesystem error
#[utoipa::path(
    post,
    path = "/api/products/create",
    tag = PRODUCT_TAG,
    request_body(content = UploadProductForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Product created", body = ProductCreatedDto),
        (status = 400, description = "Invalid form data", body = ErrorDto),
        (status = 413, description = "Upload too large", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let (params, image) = read_upload_form(multipart).await?;

    let service = ProductService::new(&state.db, &state.upload_dir);
    let product = service.create_with_image(params, image).await?;

    Ok((StatusCode::CREATED, Json(product_created(product))))
}

/// Get a product by id, reviews included.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.upload_dir);

    match service.get_by_id(id).await? {
        Some(product) => Ok((StatusCode::OK, Json(product.into_dto()))),
        None => Err(product_not_found()),
    }
}

/// Update a product's editable fields.
///
/// The rating aggregate and reviews cannot be changed here.
///
/// # Returns
/// - `200 OK` - Updated product
/// - `400 Bad Request` - Blank name or invalid price
/// - `404 Not Found` - No product with that id
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.upload_dir);

    let params = UpdateProductParams::from_dto(id, payload);

    match service.update(params).await? {
        Some(product) => Ok((StatusCode::OK, Json(product.into_dto()))),
        None => Err(product_not_found()),
    }
}

/// Delete a product with its reviews and image.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.upload_dir);

    if !service.delete(id).await? {
        return Err(product_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Review a product.
///
/// The reviewer is the logged-in user; each user may review a product once. The
/// product's rating becomes the mean of all its review ratings.
///
/// # Access Control
/// - Requires a logged-in user
///
/// # Returns
/// - `201 Created` - Review added
/// - `400 Bad Request` - Rating outside 1..=5, or product already reviewed by this user
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No product with that id
#[utoipa::path(
    post,
    path = "/api/products/{id}/reviews",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review added", body = MessageDto),
        (status = 400, description = "Invalid rating or product already reviewed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product_review(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db, &state.upload_dir);

    // Convert DTO to server model
    let params = CreateReviewParams::from_dto(id, &user, payload);

    service.add_review(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "Review added".to_string(),
        }),
    ))
}

fn product_created(product: Product) -> ProductCreatedDto {
    ProductCreatedDto {
        message: "Product created".to_string(),
        product: product.into_dto(),
    }
}

fn product_not_found() -> AppError {
    AppError::NotFound("Product not found".to_string())
}

/// Reads the product fields and the image from a multipart body.
async fn read_upload_form(
    mut multipart: Multipart,
) -> Result<(CreateProductParams, ImageUpload), AppError> {
    let mut name = None;
    let mut price = None;
    let mut description = None;
    let mut category = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        match field_name.as_str() {
            "name" => name = Some(field.text().await?),
            "price" => price = Some(field.text().await?),
            "description" => description = Some(field.text().await?),
            "category" => category = Some(field.text().await?),
            "image" => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?.to_vec();

                image = Some(ImageUpload {
                    content_type,
                    bytes,
                });
            }
            other => tracing::debug!("Ignoring multipart field '{}'", other),
        }
    }

    let name = name.ok_or_else(|| missing_field("name"))?;
    let price = price.ok_or_else(|| missing_field("price"))?;
    let image = image.ok_or_else(|| missing_field("image"))?;

    let price = price
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest("Price must be a number".to_string()))?;

    let params = CreateProductParams::from_dto(CreateProductDto {
        name,
        price,
        description: description.unwrap_or_default(),
        category: category.unwrap_or_default(),
    });

    Ok((params, image))
}

fn missing_field(field: &str) -> AppError {
    AppError::BadRequest(format!("Field '{}' is required", field))
}
