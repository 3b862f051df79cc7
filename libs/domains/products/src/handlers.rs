use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AuditEvent, ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, ServiceUnavailableResponse,
        UnprocessableJsonResponse,
    },
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::ProductDto;
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const TAG: &str = "Product Management";

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        list_products_by_category,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(ProductDto),
        responses(
            BadRequestValidationResponse,
            UnprocessableJsonResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags((name = TAG, description = "APIs for managing products"))
)]
pub struct ApiDoc;

pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/category/{category}", get(list_products_by_category))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(Arc::new(service))
}

/// Get all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Successfully retrieved products", body = Vec<ProductDto>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    Ok(Json(service.list_products().await?))
}

/// Get products by category
///
/// Matches the category exactly, case included.
#[utoipa::path(
    get,
    path = "/category/{category}",
    tag = TAG,
    params(("category" = String, Path, description = "Category of products to retrieve")),
    responses(
        (status = 200, description = "Successfully retrieved products", body = Vec<ProductDto>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_products_by_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(category): Path<String>,
) -> ProductResult<Json<Vec<ProductDto>>> {
    Ok(Json(service.list_by_category(&category).await?))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "ID of the product to retrieve")),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 404, description = "Product not found"),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<ProductDto>> {
    Ok(Json(service.get_product(&id).await?))
}

/// Create a new product
///
/// Any `id`, `createdAt` or `updatedAt` in the body is ignored.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = UnprocessableJsonResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;

    AuditEvent::new(
        "product.create",
        format!("product:{}", product.id.as_deref().unwrap_or_default()),
    )
    .with_client(&headers)
    .with_details(json!({
        "name": product.name,
        "category": product.category,
    }))
    .emit();

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update an existing product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "ID of the product to update")),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, description = "Product not found"),
        (status = 422, response = UnprocessableJsonResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> ProductResult<Json<ProductDto>> {
    let product = service.update_product(&id, input).await?;

    AuditEvent::new("product.update", format!("product:{}", id))
        .with_client(&headers)
        .emit();

    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = String, Path, description = "ID of the product to delete")),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 404, description = "Product not found"),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ProductResult<StatusCode> {
    service.delete_product(&id).await?;

    AuditEvent::new("product.delete", format!("product:{}", id))
        .with_client(&headers)
        .emit();

    Ok(StatusCode::NO_CONTENT)
}
