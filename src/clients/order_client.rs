//! # Order Client
//!
//! The order coordinator. `create_order` works in these steps:
//!
//! 1. validate the request
//! 2. reserve each line through the catalog, in request order
//! 3. on the first rejection, release everything already reserved and return the rejection
//! 4. hand the reserved lines to the order store, which assigns the id and prices the order
//!
//! If the store itself fails, the reservations are released as well, so no abort path leaves
//! inventory held by an order that does not exist. Steps 2 to 4 run in a spawned task that
//! outlives the caller's future.
use crate::clients::ProductClient;
use crate::model::{CreateOrderRequest, Order, OrderCreate, OrderId, OrderLine, OrderUpdate};
use crate::order_actor::{normalize_code, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, error, info, instrument, warn, Instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    products: ProductClient,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, products: ProductClient) -> Self {
        Self { inner, products }
    }

    /// Places an order. See the module docs for the steps.
    ///
    /// The reserve-then-store sequence runs in its own task. Dropping the returned future (a
    /// disconnected HTTP client, a timeout) does not cancel it, so the order is either stored
    /// or fully rolled back.
    #[instrument(skip(self, request), fields(customer_id = %request.customer_id))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        debug!(?request, "create_order called");
        validate(&request)?;

        let coordinator = self.clone();
        tokio::spawn(async move { coordinator.place(request).await }.in_current_span())
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?
    }

    async fn place(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        let mut reserved: Vec<OrderLine> = Vec::with_capacity(request.items.len());
        for item in &request.items {
            match self.products.reserve(item.product_id, item.quantity).await {
                Ok(unit_price) => reserved.push(OrderLine {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price,
                }),
                Err(e) => {
                    warn!(product_id = %item.product_id, error = %e, "Reservation rejected");
                    self.release_all(&reserved).await;
                    return Err(e.into());
                }
            }
        }

        let payload = OrderCreate {
            customer_id: request.customer_id,
            items: reserved.clone(),
            discount_code: normalize_code(request.discount_code),
        };
        match self.inner.create(payload).await {
            Ok(order) => {
                info!(order_id = %order.id, total = %order.total_amount, "Order placed");
                Ok(order)
            }
            Err(e) => {
                error!(error = %e, "Order store rejected a reserved order");
                self.release_all(&reserved).await;
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }

    /// Snapshot of all orders, ordered by id.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    /// Replaces the discount code of an existing order and recomputes its total.
    ///
    /// `None` or a blank code removes the discount.
    #[instrument(skip(self))]
    pub async fn apply_discount(
        &self,
        id: OrderId,
        code: Option<String>,
    ) -> Result<Order, OrderError> {
        self.inner
            .update(id, OrderUpdate::ApplyDiscount(code))
            .await
            .map_err(|e| OrderError::from_framework(id, e))
    }

    /// Compensates the given reservations. A failed release is logged and does not replace the
    /// error that triggered the rollback.
    async fn release_all(&self, reserved: &[OrderLine]) {
        for line in reserved.iter().rev() {
            if let Err(e) = self.products.release(line.product_id, line.quantity).await {
                error!(
                    product_id = %line.product_id,
                    quantity = line.quantity,
                    error = %e,
                    "Rollback release failed"
                );
            }
        }
    }
}

fn validate(request: &CreateOrderRequest) -> Result<(), OrderError> {
    if request.customer_id.trim().is_empty() {
        return Err(OrderError::InvalidRequest(
            "customerId must not be blank".to_string(),
        ));
    }
    if request.items.is_empty() {
        return Err(OrderError::InvalidRequest(
            "order must contain at least one item".to_string(),
        ));
    }
    if let Some(item) = request.items.iter().find(|item| item.quantity == 0) {
        return Err(OrderError::InvalidRequest(format!(
            "quantity for {} must be greater than zero",
            item.product_id
        )));
    }
    Ok(())
}
