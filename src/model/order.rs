//! Customer orders and the requests that place them.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](resource_actor::ActorEntity) trait, so the order
//! store is a [`ResourceActor`](resource_actor::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Updates ([`OrderUpdate`])

use crate::model::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Order lifecycle. Orders are created `Pending` and nothing moves them on yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
}

/// One reserved line of an order. `unit_price` is the catalog price at reservation time, so
/// later price changes never rewrite order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: String,
    /// Lines in request order.
    pub items: Vec<OrderLine>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub discount_code: Option<String>,
}

impl Order {
    /// Creates a pending order with a zero total.
    ///
    /// The total is filled in by the order store once the discount code is attached (see
    /// `on_create`).
    pub fn new(
        id: OrderId,
        customer_id: impl Into<String>,
        items: Vec<OrderLine>,
        discount_code: Option<String>,
    ) -> Self {
        Self {
            id,
            customer_id: customer_id.into(),
            items,
            total_amount: Decimal::ZERO,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            discount_code,
        }
    }
}

/// Payload for storing an order whose lines have already been reserved.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: String,
    pub items: Vec<OrderLine>,
    pub discount_code: Option<String>,
}

/// Changes accepted by an existing order.
#[derive(Debug, Clone)]
pub enum OrderUpdate {
    /// Attach (or replace) the discount code and reprice.
    ApplyDiscount(Option<String>),
}

/// A requested `(product, quantity)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl LineItemRequest {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Everything a caller sends to place an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: String,
    #[serde(default)]
    pub items: Vec<LineItemRequest>,
    #[serde(default)]
    pub discount_code: Option<String>,
}

impl CreateOrderRequest {
    pub fn new(customer_id: impl Into<String>, items: Vec<LineItemRequest>) -> Self {
        Self {
            customer_id: customer_id.into(),
            items,
            discount_code: None,
        }
    }

    pub fn with_discount(mut self, code: impl Into<String>) -> Self {
        self.discount_code = Some(code.into());
        self
    }
}
