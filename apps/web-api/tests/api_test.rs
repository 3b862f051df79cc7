//! End-to-end requests through the fully assembled router with in-memory
//! products.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use web_api::config::Config;

async fn app() -> Router {
    let (_state, app) = web_api::initialize(Config::in_memory()).await.unwrap();
    app
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_startup_seeds_products_and_users() {
    let app = app().await;

    let (status, products) = send(&app, get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products[0]["name"], "Laptop");
    assert_eq!(products[0]["price"], "999.99");
    assert_eq!(products[1]["name"], "Smartphone");
    assert_eq!(products[1]["stockQuantity"], 100);

    let (status, users) = send(&app, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users[0]["username"], "user1");
    assert_eq!(users[1]["username"], "user2");
}

#[tokio::test]
async fn test_product_flow() {
    let app = app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/products",
            json!({"name": "Widget", "price": 9.99, "stockQuantity": 3, "category": "Tools"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["createdAt"].is_string());
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, fetched) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, tools) = send(&app, get("/api/products/category/Tools")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tools.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_user_flow() {
    let app = app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/users",
            json!({"username": "bob", "email": "bob@example.com", "password": "Bob12345"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (_, users) = send(&app, get("/api/users")).await;
    let bobs = users
        .as_array()
        .unwrap()
        .iter()
        .filter(|u| u["username"] == "bob")
        .count();
    assert_eq!(bobs, 1);

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/users/{}", id),
            json!({"username": "bob", "email": "bob@work.example.com", "password": "Bob12345"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["email"], "bob@work.example.com");
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
    assert!(updated["updatedAt"].is_string());
}

#[tokio::test]
async fn test_user_weak_password_is_rejected() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/users",
            json!({"username": "eve", "email": "eve@example.com", "password": "abc12345"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["password"].is_array());
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = app().await;

    let (status, health) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["name"], "web_api");

    let (status, ready) = send(&app, get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready["status"], "ready");
    assert!(ready.get("database").is_none());
}

#[tokio::test]
async fn test_probes_carry_security_headers() {
    let app = app().await;

    for uri in ["/health", "/ready"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff",
            "{}",
            uri
        );
    }
}

#[tokio::test]
async fn test_openapi_lists_both_resources() {
    let app = app().await;

    let (status, doc) = send(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "MonoRepo Web Application API");
    assert!(doc["paths"]["/api/products/{id}"].is_object());
    assert!(doc["paths"]["/api/users/{id}"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/orders")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
