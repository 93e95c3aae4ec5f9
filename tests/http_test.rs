use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use storefront::config::Settings;
use storefront::http::{router, AppState};
use storefront::lifecycle::{default_catalog, OrderSystem};
use tower::ServiceExt;

async fn app() -> (Router, OrderSystem) {
    let system = OrderSystem::new(&Settings::default());
    system.seed_catalog(default_catalog()).await.unwrap();
    (router(AppState::from_system(&system)), system)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_list_products_returns_the_seeded_catalog() {
    let (app, _system) = app().await;
    let (status, body) = send(&app, get("/api/products")).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 4);
    assert_eq!(products[0]["name"], "Laptop");
    assert_eq!(products[0]["price"], "999.99");
    assert_eq!(products[0]["inventory"], 10);
    assert_eq!(products[3]["category"], "Electronics");
}

#[tokio::test]
async fn test_create_and_fetch_order() {
    let (app, _system) = app().await;

    let (status, created) = send(
        &app,
        post_json(
            "/api/orders",
            json!({
                "customerId": "alice",
                "items": [{"productId": 1, "quantity": 2}],
                "discountCode": "SAVE10"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["customerId"], "alice");
    assert_eq!(created["totalAmount"], "1799.98");
    assert_eq!(created["status"], "PENDING");
    assert_eq!(created["items"][0]["unitPrice"], "999.99");
    assert!(created["createdAt"].is_string());

    let (status, fetched) = send(&app, get("/api/orders/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, listed) = send(&app, get("/api/orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (_, products) = send(&app, get("/api/products")).await;
    assert_eq!(products[0]["inventory"], 8);
}

#[tokio::test]
async fn test_error_statuses_and_bodies() {
    let (app, _system) = app().await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/orders",
            json!({"customerId": "alice", "items": [{"productId": 1, "quantity": 11}]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "insufficient_inventory");

    let (status, body) = send(
        &app,
        post_json(
            "/api/orders",
            json!({"customerId": "alice", "items": [{"productId": 42, "quantity": 1}]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "product_not_found");

    let (status, body) = send(
        &app,
        post_json("/api/orders", json!({"customerId": "alice", "items": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");

    let (status, body) = send(&app, post_json("/api/orders", json!({"items": "nope"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");

    let (status, body) = send(&app, get("/api/orders/77")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = send(&app, get("/api/orders/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_apply_discount_endpoint_reprices() {
    let (app, _system) = app().await;
    send(
        &app,
        post_json(
            "/api/orders",
            json!({"customerId": "bob", "items": [{"productId": 2, "quantity": 1}]}),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        post_json("/api/orders/1/discount", json!({"discountCode": "SAVE10"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalAmount"], "26.99");
    assert_eq!(body["discountCode"], "SAVE10");

    let (status, _) = send(
        &app,
        post_json("/api/orders/5/discount", json!({"discountCode": "SAVE10"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_cors() {
    let (app, _system) = app().await;

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://shop.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
