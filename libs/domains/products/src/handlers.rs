//! HTTP handlers for the products API
//!
//! Handlers validate request bodies (via [`crate::validator`]) before
//! invoking the service, and rely on [`crate::error::ProductError`]'s
//! `IntoResponse` for the error-kind → status mapping. Filtered reads that
//! match nothing return 200 with an empty array, consistent with list-all.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, ProductDraft};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validator::validate_draft;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        get_products_by_category,
        get_products_by_price,
        get_products_by_stock,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductDraft),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/category/{category}", get(get_products_by_category))
        .route("/price/{price}", get(get_products_by_price))
        .route("/stock/{stock}", get(get_products_by_stock))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products (possibly empty)", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_products().await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(draft): Json<ProductDraft>,
) -> ProductResult<impl IntoResponse> {
    let fields = validate_draft(&draft)?;
    let product = service.create_product(fields).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// List products in a category (exact match)
#[utoipa::path(
    get,
    path = "/category/{category}",
    tag = "Products",
    params(
        ("category" = String, Path, description = "Category to match exactly")
    ),
    responses(
        (status = 200, description = "Matching products (possibly empty)", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products_by_category<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(category): Path<String>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_products_by_category(&category).await?;
    Ok(Json(products))
}

/// List products with a given price (exact match)
#[utoipa::path(
    get,
    path = "/price/{price}",
    tag = "Products",
    params(
        ("price" = f64, Path, description = "Price to match exactly")
    ),
    responses(
        (status = 200, description = "Matching products (possibly empty)", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products_by_price<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(price): Path<f64>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_products_by_price(price).await?;
    Ok(Json(products))
}

/// List products with a given stock count (exact match)
#[utoipa::path(
    get,
    path = "/stock/{stock}",
    tag = "Products",
    params(
        ("stock" = i64, Path, description = "Stock count to match exactly")
    ),
    responses(
        (status = 200, description = "Matching products (possibly empty)", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products_by_stock<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(stock): Path<i64>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.get_products_by_stock(stock).await?;
    Ok(Json(products))
}

/// Update a product (full replace of its fields)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = ProductDraft,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    Json(draft): Json<ProductDraft>,
) -> ProductResult<Json<Product>> {
    let fields = validate_draft(&draft)?;
    let product = service.update_product(id, fields).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
