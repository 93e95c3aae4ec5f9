//! # Product Client
//!
//! High-level API for the catalog actor. Wraps a `ResourceClient<Product>` and turns
//! [`ProductAction`] replies into plain values.
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Adds a product to the catalog. Used for seeding; not exposed over HTTP.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Read-only snapshot of one product.
    #[instrument(skip(self))]
    pub async fn lookup(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id).await?.ok_or(ProductError::NotFound(id))
    }

    /// Every product, ordered by id.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Current inventory of a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        match self.action(id, ProductAction::CheckStock).await? {
            ProductActionResult::Stock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Atomically checks and decrements inventory.
    ///
    /// Returns the unit price captured in the same step, so the caller never prices a line
    /// with a value read at a different moment than the reservation.
    #[instrument(skip(self))]
    pub async fn reserve(&self, id: ProductId, quantity: u32) -> Result<Decimal, ProductError> {
        debug!("Reserving {} units", quantity);
        match self.action(id, ProductAction::Reserve(quantity)).await? {
            ProductActionResult::Reserved { unit_price, .. } => Ok(unit_price),
            other => Err(unexpected(other)),
        }
    }

    /// Puts reserved units back. Returns the new inventory.
    #[instrument(skip(self))]
    pub async fn release(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Releasing {} units", quantity);
        match self.action(id, ProductAction::Release(quantity)).await? {
            ProductActionResult::Released { available } => Ok(available),
            other => Err(unexpected(other)),
        }
    }

    async fn action(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| ProductError::from_framework(id, e))
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result {:?}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_action, MockClient};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task = tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::CheckStock);
        responder.send(Ok(ProductActionResult::Stock(42))).unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_reserve_returns_captured_price() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let reserve_task = tokio::spawn(async move { product_client.reserve(ProductId(2), 5).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(2));
        assert_eq!(action, ProductAction::Reserve(5));
        responder
            .send(Ok(ProductActionResult::Reserved {
                unit_price: dec!(29.99),
                remaining: 45,
            }))
            .unwrap();

        assert_eq!(reserve_task.await.unwrap().unwrap(), dec!(29.99));
    }

    #[tokio::test]
    async fn test_reserve_recovers_typed_inventory_error() {
        let mut mock = MockClient::<Product>::new();
        let shortage = ProductError::InsufficientInventory {
            product_id: ProductId(1),
            requested: 100,
            available: 10,
        };
        mock.expect_action(ProductId(1))
            .return_err(FrameworkError::EntityError(Box::new(shortage.clone())));

        let product_client = ProductClient::new(mock.client());
        assert_eq!(product_client.reserve(ProductId(1), 100).await, Err(shortage));
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_action(ProductId(9))
            .return_err(FrameworkError::NotFound("product_9".into()));
        mock.expect_get(ProductId(9)).return_ok(None);

        let product_client = ProductClient::new(mock.client());
        assert_eq!(
            product_client.release(ProductId(9), 1).await,
            Err(ProductError::NotFound(ProductId(9)))
        );
        assert_eq!(
            product_client.lookup(ProductId(9)).await,
            Err(ProductError::NotFound(ProductId(9)))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_catalog_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Product>(1);
        drop(receiver);
        let product_client = ProductClient::new(client);

        assert!(matches!(
            product_client.list_products().await,
            Err(ProductError::ActorCommunicationError(_))
        ));
    }
}
