//! # ActorEntity Trait
//!
//! The contract a resource type implements to be stored and served by a
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the payload of every
//! request, so a product payload can never be sent to the order store.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
///
/// Hooks are `async` and receive the actor's `Context` by reference. Update and action hooks
/// run in the entity's own worker, which awaits each hook to completion before taking the next
/// request for that key, so the body of a hook is atomic with respect to every other request
/// against the same entity.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier assigned by the store. Built from the store's `u32` counter and ordered so
    /// that listings come back in assignment order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance. Use `()` when the entity is never updated.
    type Update: Send + Sync + Debug;

    /// Entity-specific operations (e.g. reserving stock).
    type Action: Send + Sync + Debug;

    /// Result returned by [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()` time. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per entity, recoverable on the client side through
    /// [`FrameworkError::downcast_entity`](crate::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its freshly assigned id and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the entity is inserted. An error here aborts the
    /// create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Handles an entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
