//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! [`ProductClient`] speaks the catalog's actions; [`OrderClient`] is the order coordinator
//! that reserves stock, rolls back on failure and hands priced orders to the order store.

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;
