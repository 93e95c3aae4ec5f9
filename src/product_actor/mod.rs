//! # Product Actor
//!
//! The catalog: product records plus the inventory they carry.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//!   and the [`CatalogSettings`] context
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use resource_actor::ActorClient;
//! use rust_decimal_macros::dec;
//! use storefront::clients::ProductClient;
//! use storefront::model::{ProductCreate, ProductId};
//! use storefront::product_actor::{self, CatalogSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(CatalogSettings::default()));
//!
//!     let widget = client
//!         .create_product(ProductCreate {
//!             name: "Widget".to_string(),
//!             price: dec!(29.99),
//!             inventory: 100,
//!             category: "Tools".to_string(),
//!         })
//!         .await?;
//!
//!     let unit_price = client.reserve(widget.id, 5).await?;
//!     assert_eq!(unit_price, dec!(29.99));
//!     assert_eq!(client.check_stock(ProductId(1)).await?, 95);
//!     assert!(client.get(widget.id).await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CatalogSettings;
pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(mailbox_capacity)
}
