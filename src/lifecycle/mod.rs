//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors.
//!
//! [`OrderSystem::new`] creates the catalog and order actors, then starts each one with its
//! context injected at `run()` time:
//!
//! | Actor | Context |
//! |---|---|
//! | catalog (`Product`) | [`CatalogSettings`](crate::product_actor::CatalogSettings), the simulated storage delay |
//! | orders (`Order`) | [`PricingEngine`](crate::pricing::PricingEngine), the discount table |
//!
//! The order coordinator ([`OrderClient`](crate::clients::OrderClient)) holds a clone of the
//! catalog client. The dependency graph is acyclic, so dropping every client closes every
//! mailbox and [`OrderSystem::shutdown`] only has to await the actor tasks.

pub mod order_system;

pub use order_system::*;
