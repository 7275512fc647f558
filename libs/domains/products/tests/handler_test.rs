//! Handler tests for the Products domain against the in-memory repository.
//!
//! These drive the real service and repository through the HTTP layer:
//! - Request deserialization and validation
//! - Response serialization and status codes
//! - Id assignment and persistence across requests

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = CatalogService::new(InMemoryProductRepository::new());
    handlers::router(service)
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    };
    app.clone().oneshot(request.unwrap()).await.unwrap()
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let app = app();

    for (expected_id, text) in [(1, "first"), (2, "second")] {
        let response = call(&app, "POST", "/", Some(json!({ "text": text }))).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let product: Product = json_body(response.into_body()).await;
        assert_eq!(product, Product::new(expected_id, text));
    }

    let response = call(&app, "GET", "/", None).await;
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 2);
}

#[tokio::test]
async fn test_create_with_explicit_id_keeps_it() {
    let app = app();

    let response = call(&app, "POST", "/", Some(json!({ "id": 40, "text": "explicit" }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, Some(40));

    let response = call(&app, "POST", "/", Some(json!({ "text": "next" }))).await;
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, Some(41));
}

#[tokio::test]
async fn test_full_lifecycle() {
    let app = app();

    let response = call(&app, "POST", "/", Some(json!({ "text": "mug" }))).await;
    let created: Product = json_body(response.into_body()).await;
    let id = created.id.unwrap();

    let response = call(&app, "GET", &format!("/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = call(
        &app,
        "PUT",
        &format!("/{id}"),
        Some(json!({ "text": "big mug" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated, Product::new(id, "big mug"));

    let response = call(&app, "DELETE", &format!("/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Product = json_body(response.into_body()).await;
    assert_eq!(deleted.text, "big mug");

    let response = call(&app, "GET", &format!("/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = call(&app, "DELETE", &format!("/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_product_returns_404_and_creates_nothing() {
    let app = app();

    let response = call(&app, "PUT", "/5", Some(json!({ "text": "ghost" }))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = call(&app, "GET", "/", None).await;
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_invalid_create_stores_nothing() {
    let app = app();

    let response = call(&app, "POST", "/", Some(json!({ "id": null, "text": null }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let problem: Value = json_body(response.into_body()).await;
    assert_eq!(
        problem["type"],
        "https://zalando.github.io/problem/constraint-violation"
    );
    assert_eq!(
        problem["violations"],
        json!([{ "field": "text", "message": "Text cannot be empty" }])
    );

    let response = call(&app, "GET", "/", None).await;
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_malformed_json_returns_problem() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from("{\"text\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/problem+json"
    );
}

#[tokio::test]
async fn test_create_after_max_id_fails_without_losing_products() {
    let app = app();

    let response = call(&app, "POST", "/", Some(json!({ "id": i64::MAX, "text": "last" }))).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = call(&app, "POST", "/", Some(json!({ "text": "overflow" }))).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = call(&app, "GET", "/", None).await;
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products, vec![Product::new(i64::MAX, "last")]);
}
