//! # Mock Clients
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running actor. Use it to test orchestration that lives in
//! a domain client (e.g. an order coordinator that reserves stock) without spawning the
//! dependency.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, replies are scripted | real store |
//! | Error injection | `return_err(..)` | requires building the failing state |
//! | Use case | logic *around* a client | the entity itself, or the full system |
//!
//! Expectations are consumed in order. Each request must match the kind of the next
//! expectation, and for keyed requests the id must match too; otherwise the mock task panics
//! and the caller sees [`FrameworkError::ActorDropped`].
//!
//! ```rust,ignore
//! let mut catalog = MockClient::<Product>::new();
//! catalog
//!     .expect_action(ProductId(1))
//!     .return_ok(ProductActionResult::Reserved { unit_price: dec!(10.00), remaining: 4 });
//!
//! let products = ProductClient::new(catalog.client());
//! products.reserve(ProductId(1), 1).await?;
//! catalog.verify();
//! ```
//!
//! For step-by-step inspection of the raw requests, use [`create_mock_client`] together with
//! [`expect_action`], [`expect_get`] or [`expect_create`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted stand-in for a `ResourceActor<T>`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create {
            response,
        })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get {
            id,
            response,
        })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update {
            id,
            response,
        })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Action {
            id,
            response,
        })
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
        let _ = respond_to.send(response);
    }

    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            reply(respond_to, response)
        }
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            assert_eq!(id, want, "Get for unexpected id");
            reply(respond_to, response)
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            reply(respond_to, response)
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            assert_eq!(id, want, "Update for unexpected id");
            reply(respond_to, response)
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => {
            assert_eq!(id, want, "Action for unexpected id");
            reply(respond_to, response)
        }
        _ => panic!("Unexpected request or expectation mismatch"),
    }
}

/// Queues one expectation once its reply is chosen.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Queue<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            make: Box::new(make),
        }
    }

    /// Reply with `Ok(value)`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Reply with `Err(error)`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client and the raw receiving end of its mailbox.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct ItemCreate {
        label: String,
    }

    #[derive(Debug)]
    enum ItemAction {
        Touch,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("item error")]
    struct ItemError;

    #[async_trait]
    impl ActorEntity for Item {
        type Id = u32;
        type Create = ItemCreate;
        type Update = ();
        type Action = ItemAction;
        type ActionResult = bool;
        type Context = ();
        type Error = ItemError;

        fn from_create_params(id: u32, params: ItemCreate) -> Result<Self, ItemError> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: (), _: &()) -> Result<(), ItemError> {
            Ok(())
        }

        async fn handle_action(&mut self, _: ItemAction, _: &()) -> Result<bool, ItemError> {
            Ok(true)
        }
    }

    fn item(id: u32, label: &str) -> Item {
        Item {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_create_payload() {
        let (client, mut receiver) = create_mock_client::<Item>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(ItemCreate {
                    label: "first".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "first");
        responder.send(Ok(item(1, "first"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created, item(1, "first"));
    }

    #[tokio::test]
    async fn test_expectations_are_answered_in_order() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_create().return_ok(item(1, "a"));
        mock.expect_get(1).return_ok(Some(item(1, "a")));
        mock.expect_list().return_ok(vec![item(1, "a"), item(2, "b")]);
        mock.expect_action(2).return_err(FrameworkError::NotFound("2".into()));

        let client = mock.client();
        let created = client
            .create(ItemCreate {
                label: "a".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.get(1).await.unwrap(), Some(item(1, "a")));
        assert_eq!(client.list().await.unwrap().len(), 2);
        assert!(matches!(
            client.perform_action(2, ItemAction::Touch).await,
            Err(FrameworkError::NotFound(_))
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_unexpected_id_drops_the_reply() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_action(1).return_ok(true);

        let result = mock.client().perform_action(7, ItemAction::Touch).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
