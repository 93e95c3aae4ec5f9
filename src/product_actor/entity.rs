//! [`ActorEntity`] implementation for [`Product`].
//!
//! Reservation is check, optional storage delay, decrement, price capture, all inside one
//! `handle_action` call. The product's worker does not take its next request until that call
//! returns, so concurrent reservations of one product serialize here while other products
//! proceed in parallel.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::time::Duration;

/// Context injected into the catalog actor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSettings {
    /// Simulated storage delay applied between the stock check and the decrement.
    pub reserve_latency: Duration,
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ();
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = CatalogSettings;
    type Error = ProductError;

    /// Creates a new Product from creation parameters. Negative prices are rejected.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.price.is_sign_negative() {
            return Err(ProductError::InvalidProduct(format!(
                "negative price {}",
                params.price
            )));
        }
        if params.name.trim().is_empty() {
            return Err(ProductError::InvalidProduct("empty name".to_string()));
        }
        Ok(Self::new(
            id,
            params.name,
            params.price,
            params.inventory,
            params.category,
        ))
    }

    // Products are immutable outside of inventory actions.
    async fn on_update(&mut self, _update: (), _ctx: &CatalogSettings) -> Result<(), ProductError> {
        Ok(())
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current inventory
    /// - `Reserve`: Decrements inventory if enough is available and returns the unit price
    /// - `Release`: Increments inventory
    async fn handle_action(
        &mut self,
        action: ProductAction,
        ctx: &CatalogSettings,
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::Stock(self.inventory)),
            ProductAction::Reserve(quantity) => {
                if quantity == 0 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                if self.inventory < quantity {
                    return Err(ProductError::InsufficientInventory {
                        product_id: self.id,
                        requested: quantity,
                        available: self.inventory,
                    });
                }
                if !ctx.reserve_latency.is_zero() {
                    tokio::time::sleep(ctx.reserve_latency).await;
                }
                self.inventory -= quantity;
                Ok(ProductActionResult::Reserved {
                    unit_price: self.price,
                    remaining: self.inventory,
                })
            }
            ProductAction::Release(quantity) => {
                let available = self
                    .inventory
                    .checked_add(quantity)
                    .ok_or(ProductError::InvalidQuantity(quantity))?;
                self.inventory = available;
                Ok(ProductActionResult::Released { available })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn laptop(inventory: u32) -> Product {
        Product::new(ProductId(1), "Laptop", dec!(999.99), inventory, "Electronics")
    }

    #[tokio::test]
    async fn test_reserve_decrements_and_captures_price() {
        let mut product = laptop(10);
        let result = product
            .handle_action(ProductAction::Reserve(2), &CatalogSettings::default())
            .await
            .unwrap();

        assert_eq!(
            result,
            ProductActionResult::Reserved {
                unit_price: dec!(999.99),
                remaining: 8
            }
        );
        assert_eq!(product.inventory, 8);
    }

    #[tokio::test]
    async fn test_reserve_rejects_oversell_without_mutation() {
        let mut product = laptop(1);
        let err = product
            .handle_action(ProductAction::Reserve(2), &CatalogSettings::default())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProductError::InsufficientInventory {
                product_id: ProductId(1),
                requested: 2,
                available: 1
            }
        );
        assert_eq!(product.inventory, 1);
    }

    #[tokio::test]
    async fn test_reserve_rejects_zero() {
        let mut product = laptop(5);
        let err = product
            .handle_action(ProductAction::Reserve(0), &CatalogSettings::default())
            .await
            .unwrap_err();
        assert_eq!(err, ProductError::InvalidQuantity(0));
    }

    #[tokio::test]
    async fn test_release_restores_and_guards_overflow() {
        let mut product = laptop(3);
        let ctx = CatalogSettings::default();
        assert_eq!(
            product.handle_action(ProductAction::Release(2), &ctx).await.unwrap(),
            ProductActionResult::Released { available: 5 }
        );

        let mut full = laptop(u32::MAX);
        assert!(full.handle_action(ProductAction::Release(1), &ctx).await.is_err());
        assert_eq!(full.inventory, u32::MAX);
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let params = ProductCreate {
            name: "Broken".into(),
            price: dec!(-1),
            inventory: 1,
            category: "Electronics".into(),
        };
        assert!(matches!(
            Product::from_create_params(ProductId(1), params),
            Err(ProductError::InvalidProduct(_))
        ));
    }
}
