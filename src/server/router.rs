use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeader, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        product::{self, PRODUCT_TAG},
    },
    service::upload::{MAX_UPLOAD_BYTES, UPLOAD_URL_PREFIX},
    state::AppState,
};

/// Room for the text parts of a multipart upload on top of the image itself.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        description = "Accounts, products and product reviews"
    ),
    tags(
        (name = AUTH_TAG, description = "Registration, login and session"),
        (name = PRODUCT_TAG, description = "Product catalogue and reviews")
    )
)]
pub struct ApiDoc;

/// API routes with their Swagger UI, without state.
pub fn router() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register_client))
        .routes(routes!(auth::register_fournisseur))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(product::get_products, product::create_product))
        .routes(routes!(product::upload_product))
        .routes(routes!(
            product::get_product_by_id,
            product::update_product,
            product::delete_product
        ))
        .routes(routes!(product::create_product_review))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api))
}

/// Full application: API routes, uploaded files and request tracing.
///
/// The session and CORS layers are added by the caller.
pub fn app(state: AppState) -> Router {
    let uploads = SetResponseHeader::overriding(
        ServeDir::new(&state.upload_dir),
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    router()
        .nest_service(UPLOAD_URL_PREFIX, uploads)
        .layer(DefaultBodyLimit::max(
            MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
