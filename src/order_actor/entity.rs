//! [`ActorEntity`] implementation for [`Order`].
//!
//! The order store prices every order itself, with the [`PricingEngine`] injected as its
//! context. `on_create` runs after the discount code is attached and `ApplyDiscount` reprices
//! in the same step, so a stored total always matches the stored lines and code.

use super::error::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::pricing::PricingEngine;
use async_trait::async_trait;
use resource_actor::ActorEntity;

/// Treats a blank discount code as no code at all.
pub fn normalize_code(code: Option<String>) -> Option<String> {
    code.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())
}

impl Order {
    fn reprice(&mut self, pricing: &PricingEngine) {
        self.total_amount = pricing.price(&self.items, self.discount_code.as_deref());
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = PricingEngine;
    type Error = OrderError;

    /// Creates a new Order from reserved lines. Lines must already carry their unit prices.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::InvalidRequest(
                "order must contain at least one item".to_string(),
            ));
        }
        Ok(Self::new(
            id,
            params.customer_id,
            params.items,
            normalize_code(params.discount_code),
        ))
    }

    async fn on_create(&mut self, pricing: &PricingEngine) -> Result<(), OrderError> {
        self.reprice(pricing);
        Ok(())
    }

    /// # Updates
    /// - `ApplyDiscount`: replaces the discount code and recomputes the total
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        pricing: &PricingEngine,
    ) -> Result<(), OrderError> {
        match update {
            OrderUpdate::ApplyDiscount(code) => {
                self.discount_code = normalize_code(code);
                self.reprice(pricing);
            }
        }
        Ok(())
    }

    // Orders have no actions; they change only through updates.
    async fn handle_action(&mut self, _action: (), _ctx: &PricingEngine) -> Result<(), OrderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderLine, OrderStatus, ProductId};
    use rust_decimal_macros::dec;

    fn create(code: Option<&str>) -> OrderCreate {
        OrderCreate {
            customer_id: "alice".to_string(),
            items: vec![OrderLine {
                product_id: ProductId(1),
                quantity: 2,
                unit_price: dec!(999.99),
            }],
            discount_code: code.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_on_create_prices_with_the_attached_code() {
        let pricing = PricingEngine::default();
        let mut order = Order::from_create_params(OrderId(1), create(Some("SAVE10"))).unwrap();
        order.on_create(&pricing).await.unwrap();

        assert_eq!(order.total_amount, dec!(1799.98));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.discount_code.as_deref(), Some("SAVE10"));
    }

    #[tokio::test]
    async fn test_apply_discount_reprices() {
        let pricing = PricingEngine::default();
        let mut order = Order::from_create_params(OrderId(1), create(None)).unwrap();
        order.on_create(&pricing).await.unwrap();
        assert_eq!(order.total_amount, dec!(1999.98));

        order
            .on_update(OrderUpdate::ApplyDiscount(Some("SAVE20".into())), &pricing)
            .await
            .unwrap();
        assert_eq!(order.total_amount, dec!(1599.98));

        order
            .on_update(OrderUpdate::ApplyDiscount(None), &pricing)
            .await
            .unwrap();
        assert_eq!(order.total_amount, dec!(1999.98));
        assert_eq!(order.discount_code, None);
    }

    #[test]
    fn test_blank_codes_are_dropped() {
        assert_eq!(normalize_code(Some("   ".into())), None);
        assert_eq!(normalize_code(Some(" SAVE10 ".into())), Some("SAVE10".into()));
        let order = Order::from_create_params(OrderId(1), create(Some(""))).unwrap();
        assert_eq!(order.discount_code, None);
    }

    #[test]
    fn test_empty_orders_are_rejected() {
        let mut params = create(None);
        params.items.clear();
        assert!(matches!(
            Order::from_create_params(OrderId(1), params),
            Err(OrderError::InvalidRequest(_))
        ));
    }
}
