use crate::clients::{OrderClient, ProductClient};
use crate::config::Settings;
use crate::model::{Product, ProductCreate};
use crate::pricing::PricingEngine;
use crate::product_actor::ProductError;
use rust_decimal::Decimal;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running storefront: both actors plus the clients that talk to them.
///
/// # Example
///
/// ```rust
/// use storefront::config::Settings;
/// use storefront::lifecycle::{default_catalog, OrderSystem};
/// use storefront::model::{CreateOrderRequest, LineItemRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new(&Settings::default());
///     system.seed_catalog(default_catalog()).await?;
///
///     let order = system
///         .order_client
///         .create_order(CreateOrderRequest::new("alice", vec![LineItemRequest::new(2, 1)]))
///         .await?;
///     assert_eq!(order.total_amount.to_string(), "29.99");
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    /// The order coordinator.
    pub order_client: OrderClient,

    /// Client for the catalog actor.
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns the catalog and order actors and wires the coordinator to the catalog.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(settings: &Settings) -> Self {
        let capacity = settings.actors.mailbox_capacity;

        // 1. Create actors
        let (product_actor, product_generic) = crate::product_actor::new(capacity);
        let (order_actor, order_generic) = crate::order_actor::new(capacity);

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run(settings.catalog.context()));
        let order_handle = tokio::spawn(
            order_actor.run(PricingEngine::from_rules(&settings.pricing.discounts)),
        );

        let product_client = ProductClient::new(product_generic);
        let order_client = OrderClient::new(order_generic, product_client.clone());

        Self {
            order_client,
            product_client,
            handles: vec![product_handle, order_handle],
        }
    }

    /// Adds `products` to the catalog in order; ids follow the same order starting at 1.
    pub async fn seed_catalog(
        &self,
        products: Vec<ProductCreate>,
    ) -> Result<Vec<Product>, ProductError> {
        let mut seeded = Vec::with_capacity(products.len());
        for params in products {
            seeded.push(self.product_client.create_product(params).await?);
        }
        info!(count = seeded.len(), "Catalog seeded");
        Ok(seeded)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client, which closes the mailboxes, then waits for each actor task to
    /// drain and exit. Fails if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// The catalog the service starts with.
pub fn default_catalog() -> Vec<ProductCreate> {
    [
        ("Laptop", Decimal::new(99999, 2), 10),
        ("Mouse", Decimal::new(2999, 2), 50),
        ("Keyboard", Decimal::new(7999, 2), 25),
        ("Monitor", Decimal::new(29999, 2), 15),
    ]
    .into_iter()
    .map(|(name, price, inventory)| ProductCreate {
        name: name.to_string(),
        price,
        inventory,
        category: "Electronics".to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_seeding_assigns_ids_in_order() {
        let system = OrderSystem::new(&Settings::default());
        let seeded = system.seed_catalog(default_catalog()).await.unwrap();

        let ids: Vec<ProductId> = seeded.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(2), ProductId(3), ProductId(4)]);
        assert_eq!(seeded[0].price, dec!(999.99));
        assert_eq!(seeded[3].inventory, 15);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_idle_system_shuts_down_cleanly() {
        let system = OrderSystem::new(&Settings::default());
        system.shutdown().await.unwrap();
    }
}
