//! # Resource Actor
//!
//! Building blocks for keyed, actor-owned stores. Each store is a Tokio task that assigns ids
//! and routes a fixed set of resource requests (create, get, list, update, and entity-specific
//! actions) to one worker task per entity.
//!
//! ## Why an actor per entity?
//!
//! - **Exclusive ownership**: each entity lives inside one task, so no `Mutex` is needed.
//! - **Atomic actions**: an action runs to completion, including any `.await` inside its
//!   handler, before its worker takes the next request for that key. A check-and-mutate
//!   action therefore cannot be interleaved with another request against the same entity.
//! - **Parallel keys**: a slow action on one entity never delays requests for another.
//! - **Cheap handles**: [`ResourceClient`] is a cloneable sender, so many tasks can talk to
//!   the same store concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use async_trait::async_trait;
//! use resource_actor::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     value: u32,
//! }
//!
//! #[derive(Debug)]
//! struct CounterCreate(u32);
//!
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = ();
//!     type Action = CounterAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(_id: u32, params: CounterCreate) -> Result<Self, CounterError> {
//!         Ok(Self { value: params.0 })
//!     }
//!
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), CounterError> {
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<u32, CounterError> {
//!         match action {
//!             CounterAction::Increment => {
//!                 self.value += 1;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let created = client.create(CounterCreate(41)).await.unwrap();
//!     assert_eq!(created.value, 41);
//!
//!     let value = client.perform_action(1, CounterAction::Increment).await.unwrap();
//!     assert_eq!(value, 42);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`] rather than to the constructor. The
//! context is passed by reference into every hook, so an entity can reach configuration or
//! other clients without storing them itself.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, letting client-side
//! orchestration be tested without spawning real actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
