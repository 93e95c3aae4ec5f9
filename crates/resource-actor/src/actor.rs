//! # Resource Actor
//!
//! The server half of a store. The store loop owns id assignment and the key map; every entity
//! is owned by its own worker task that answers requests for that key strictly one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Requests forwarded from the store loop to the worker owning one entity.
enum EntityRequest<T: ActorEntity> {
    Get {
        respond_to: Response<Option<T>>,
    },
    Update {
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// Unbounded: every queued request has a caller awaiting its reply, so the queue is bounded by
// the number of concurrent callers, and the store loop never waits on a busy key.
type WorkerSender<T> = mpsc::UnboundedSender<EntityRequest<T>>;

/// The generic actor that manages a collection of entities.
///
/// Ids come from `next_id`, a plain counter starting at 1. Because only the store loop
/// increments it, ids are unique and strictly increasing without any atomics.
///
/// Hooks for an existing entity run in that entity's worker, which awaits each hook before
/// taking its next request. A handler that checks a value, awaits, then mutates it cannot be
/// observed half-done, while requests for other keys proceed in parallel.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    entities: BTreeMap<T::Id, WorkerSender<T>>,
    workers: JoinSet<()>,
    next_id: u32,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and a client connected to it.
    ///
    /// `buffer_size` is the mailbox capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Product" instead of "storefront::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            entities: BTreeMap::new(),
            workers: JoinSet::new(),
            next_id: 1,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped, then waits for the entity
    /// workers to drain.
    ///
    /// `context` is shared with every worker and handed to each hook by reference.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        let context = Arc::new(context);
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    self.handle_create(params, respond_to, &context).await
                }
                ResourceRequest::Get { id, respond_to } => match self.entities.get(&id) {
                    Some(worker) => forward(worker, EntityRequest::Get { respond_to }),
                    None => {
                        debug!(entity_type, %id, found = false, "Get");
                        let _ = respond_to.send(Ok(None));
                    }
                },
                ResourceRequest::List { respond_to } => self.handle_list(respond_to),
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => match self.entities.get(&id) {
                    Some(worker) => forward(worker, EntityRequest::Update { update, respond_to }),
                    None => not_found::<T, _>(entity_type, id, respond_to),
                },
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => match self.entities.get(&id) {
                    Some(worker) => forward(worker, EntityRequest::Action { action, respond_to }),
                    None => not_found::<T, _>(entity_type, id, respond_to),
                },
            }
        }

        let size = self.entities.len();
        self.entities.clear();
        while self.workers.join_next().await.is_some() {}
        info!(entity_type, size, "Shutdown");
    }

    async fn handle_create(
        &mut self,
        params: T::Create,
        respond_to: Response<T>,
        ctx: &Arc<T::Context>,
    ) {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Create failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                return;
            }
        };
        if let Err(e) = item.on_create(ctx.as_ref()).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            return;
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        let worker = EntityWorker {
            id: id.clone(),
            entity: item.clone(),
            receiver,
            context: Arc::clone(ctx),
            entity_type,
        };
        self.workers.spawn(worker.run());
        self.entities.insert(id.clone(), sender);
        info!(entity_type, %id, size = self.entities.len(), "Created");
        let _ = respond_to.send(Ok(item));
    }

    /// Collects a snapshot of every entity in id order without blocking the store loop. Each
    /// entity is read after any request already queued for it.
    fn handle_list(&self, respond_to: Response<Vec<T>>) {
        debug!(entity_type = self.entity_type, size = self.entities.len(), "List");
        let mut replies = Vec::with_capacity(self.entities.len());
        for worker in self.entities.values() {
            let (tx, rx) = oneshot::channel();
            forward(worker, EntityRequest::Get { respond_to: tx });
            replies.push(rx);
        }

        tokio::spawn(async move {
            let mut items = Vec::with_capacity(replies.len());
            for reply in replies {
                if let Ok(Ok(Some(item))) = reply.await {
                    items.push(item);
                }
            }
            let _ = respond_to.send(Ok(items));
        });
    }
}

fn forward<T: ActorEntity>(worker: &WorkerSender<T>, request: EntityRequest<T>) {
    // Workers only exit once the store loop has dropped their sender.
    let _ = worker.send(request);
}

fn not_found<T: ActorEntity, R>(entity_type: &'static str, id: T::Id, respond_to: Response<R>) {
    warn!(entity_type, %id, "Not found");
    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
}

/// Owns one entity and serves the requests for its key in arrival order.
struct EntityWorker<T: ActorEntity> {
    id: T::Id,
    entity: T,
    receiver: mpsc::UnboundedReceiver<EntityRequest<T>>,
    context: Arc<T::Context>,
    entity_type: &'static str,
}

impl<T: ActorEntity> EntityWorker<T> {
    async fn run(mut self) {
        while let Some(request) = self.receiver.recv().await {
            match request {
                EntityRequest::Get { respond_to } => {
                    debug!(entity_type = self.entity_type, id = %self.id, found = true, "Get");
                    let _ = respond_to.send(Ok(Some(self.entity.clone())));
                }
                EntityRequest::Update { update, respond_to } => {
                    self.handle_update(update, respond_to).await
                }
                EntityRequest::Action { action, respond_to } => {
                    self.handle_action(action, respond_to).await
                }
            }
        }
    }

    async fn handle_update(&mut self, update: T::Update, respond_to: Response<T>) {
        let (entity_type, id) = (self.entity_type, &self.id);
        debug!(entity_type, %id, ?update, "Update");

        // Work on a copy so a failed hook leaves the stored entity untouched.
        let mut updated = self.entity.clone();
        match updated.on_update(update, self.context.as_ref()).await {
            Ok(()) => {
                self.entity = updated.clone();
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(updated));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Update failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            }
        }
    }

    async fn handle_action(&mut self, action: T::Action, respond_to: Response<T::ActionResult>) {
        let (entity_type, id) = (self.entity_type, &self.id);
        debug!(entity_type, %id, ?action, "Action");

        let result = self
            .entity
            .handle_action(action, self.context.as_ref())
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        let _ = respond_to.send(result);
    }
}
