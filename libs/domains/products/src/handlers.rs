//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AuditEvent, AuditOutcome, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestResponse, ConstraintViolationResponse, InternalServerErrorResponse,
    },
    extract_ip_from_headers, extract_user_agent,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductRequest};
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductRequest, axum_helpers::Problem, axum_helpers::Violation),
        responses(
            ConstraintViolationResponse,
            BadRequestResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router; mount it at `/products`.
pub fn router<S: ProductService + 'static>(service: S) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products::<S>).post(create_product::<S>))
        .route(
            "/{id}",
            get(get_product::<S>)
                .put(update_product::<S>)
                .delete(delete_product::<S>),
        )
        .with_state(shared_service)
}

fn audit(action: &str, id: Option<i64>, outcome: AuditOutcome, headers: &HeaderMap) {
    let mut event = AuditEvent::new(action, outcome)
        .with_ip(extract_ip_from_headers(headers))
        .with_user_agent(extract_user_agent(headers));
    if let Some(id) = id {
        event = event.with_resource(format!("product:{}", id));
    }
    event.log();
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "All products ordered by id", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<S: ProductService>(
    State(service): State<Arc<S>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.find_all_products().await?;
    Ok(Json(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, description = "Product not found, empty body"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<S: ProductService>(
    State(service): State<Arc<S>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    service
        .find_product_by_id(id)
        .await?
        .map(Json)
        .ok_or(ProductError::NotFound(id))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = ConstraintViolationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<S: ProductService>(
    State(service): State<Arc<S>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<ProductRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service
        .save_product(input.into_product())
        .await
        .inspect_err(|_| audit("product.create", None, AuditOutcome::Failure, &headers))?;

    audit("product.create", product.id, AuditOutcome::Success, &headers);
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product
///
/// The path id always wins over any id in the body.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = ConstraintViolationResponse),
        (status = 404, description = "Product not found, empty body"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<S: ProductService>(
    State(service): State<Arc<S>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ProductRequest>,
) -> ProductResult<Json<Product>> {
    if service.find_product_by_id(id).await?.is_none() {
        audit("product.update", Some(id), AuditOutcome::Failure, &headers);
        return Err(ProductError::NotFound(id));
    }

    let product = service
        .save_product(input.into_product_with_id(id))
        .await
        .inspect_err(|_| audit("product.update", Some(id), AuditOutcome::Failure, &headers))?;

    audit("product.update", Some(id), AuditOutcome::Success, &headers);
    Ok(Json(product))
}

/// Delete a product
///
/// Responds with the product as it was before deletion.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, description = "Product not found, empty body"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<S: ProductService>(
    State(service): State<Arc<S>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    let Some(product) = service.find_product_by_id(id).await? else {
        audit("product.delete", Some(id), AuditOutcome::Failure, &headers);
        return Err(ProductError::NotFound(id));
    };

    service
        .delete_product_by_id(id)
        .await
        .inspect_err(|_| audit("product.delete", Some(id), AuditOutcome::Failure, &headers))?;

    audit("product.delete", Some(id), AuditOutcome::Success, &headers);
    Ok(Json(product))
}
