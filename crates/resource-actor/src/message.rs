//! # Resource Requests
//!
//! The messages a [`ResourceClient`](crate::ResourceClient) sends to a
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request against a resource store.
///
/// There is no delete: stores in this system only grow.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    /// Assign an id, build the entity, run `on_create`, store it, reply with the stored entity.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    /// Snapshot of a single entity, `None` when absent.
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every entity, ordered by id.
    List { respond_to: Response<Vec<T>> },
    /// Apply `on_update` and reply with the updated entity.
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    /// Run `handle_action` against one entity.
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
