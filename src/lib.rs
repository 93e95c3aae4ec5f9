//! # Storefront
//!
//! A small e-commerce backend: a product catalog, an order coordinator and a pricing engine,
//! each store owned by a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! ## Order placement
//!
//! ```text
//! OrderClient::create_order
//!   -> validate
//!   -> ProductClient::reserve for each line (check + decrement + price capture, one message)
//!        on failure: release what was reserved, reject
//!   -> order actor Create: id assigned, total priced from lines + discount code
//! ```
//!
//! Inventory lives only inside the catalog actor and changes only through its `Reserve` and
//! `Release` actions, which run one at a time per product. Two orders racing for the last units
//! cannot both win, regardless of any storage latency inside the reservation.
//!
//! ## Module Tour
//!
//! - [`model`] - the entities and request payloads
//! - [`product_actor`] / [`order_actor`] - the two `ActorEntity` implementations
//! - [`pricing`] - exact decimal subtotal, discount and total
//! - [`clients`] - typed clients; [`OrderClient`](clients::OrderClient) is the coordinator
//! - [`lifecycle`] - [`OrderSystem`](lifecycle::OrderSystem) starts, seeds and stops the actors
//! - [`http`] - the axum router
//! - [`config`] - layered [`Settings`](config::Settings)
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! STOREFRONT__SERVER__PORT=9000 STOREFRONT__CATALOG__RESERVE_LATENCY_MS=10 cargo run
//! ```

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod product_actor;
