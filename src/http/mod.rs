//! # HTTP API
//!
//! The REST surface over the actors.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/api/products` | [`products::list_products`] |
//! | POST | `/api/orders` | [`orders::create_order`] |
//! | GET | `/api/orders` | [`orders::list_orders`] |
//! | GET | `/api/orders/{id}` | [`orders::get_order`] |
//! | POST | `/api/orders/{id}/discount` | [`orders::apply_discount`] |
//! | GET | `/health` | liveness probe |
//!
//! Failures are rendered by [`ApiError`] as `{"error": kind, "message": text}`.

pub mod error;
pub mod orders;
pub mod products;

pub use error::ApiError;

use crate::clients::{OrderClient, ProductClient};
use crate::lifecycle::OrderSystem;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn new(products: ProductClient, orders: OrderClient) -> Self {
        Self { products, orders }
    }

    /// Clones the clients out of a running system.
    pub fn from_system(system: &OrderSystem) -> Self {
        Self::new(system.product_client.clone(), system.order_client.clone())
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/products", get(products::list_products))
        .route(
            "/api/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/api/orders/{id}", get(orders::get_order))
        .route("/api/orders/{id}/discount", post(orders::apply_discount))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
