//! # Order Actor
//!
//! The order store. It assigns order ids, prices each order with the injected
//! [`PricingEngine`](crate::pricing::PricingEngine) and keeps orders for later lookup.
//! Orders are never deleted.
//!
//! Reservation and rollback happen before an order reaches this actor, in
//! [`OrderClient::create_order`](crate::clients::OrderClient::create_order). Keeping that
//! orchestration in a task per order lets independent orders proceed in parallel; they only
//! meet at single reservation messages for the same product.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]

pub mod entity;
pub mod error;

pub use entity::normalize_code;
pub use error::*;

use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(mailbox_capacity)
}
