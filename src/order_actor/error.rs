//! Error types for the Order actor and the order coordinator.

use crate::model::{OrderId, ProductId};
use crate::product_actor::ProductError;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The request was rejected before any inventory was touched.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A line referenced a product the catalog does not know.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A line asked for more units than the catalog holds.
    #[error("Insufficient inventory for {product_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Translates a framework error for a request against order `id`.
    pub fn from_framework(id: OrderId, e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(_) => OrderError::NotFound(id),
            other => OrderError::from(other),
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(typed) => typed,
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            ProductError::InsufficientInventory {
                product_id,
                requested,
                available,
            } => OrderError::InsufficientInventory {
                product_id,
                requested,
                available,
            },
            ProductError::InvalidQuantity(q) => {
                OrderError::InvalidRequest(format!("invalid quantity {}", q))
            }
            ProductError::InvalidProduct(msg) => OrderError::InvalidRequest(msg),
            ProductError::ActorCommunicationError(msg) => OrderError::ActorCommunicationError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_keep_their_meaning() {
        assert_eq!(
            OrderError::from(ProductError::NotFound(ProductId(7))),
            OrderError::ProductNotFound(ProductId(7))
        );
        assert_eq!(
            OrderError::from(ProductError::InsufficientInventory {
                product_id: ProductId(1),
                requested: 5,
                available: 2
            }),
            OrderError::InsufficientInventory {
                product_id: ProductId(1),
                requested: 5,
                available: 2
            }
        );
    }

    #[test]
    fn test_missing_order_names_the_id() {
        let err = OrderError::from_framework(OrderId(4), FrameworkError::NotFound("order_4".into()));
        assert_eq!(err, OrderError::NotFound(OrderId(4)));
    }
}
