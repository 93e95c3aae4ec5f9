//! Error types for the Product actor.

use crate::model::ProductId;
use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient inventory for {product_id}: requested {requested}, available {available}")]
    InsufficientInventory {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Zero-unit reservations, or releases that would overflow the counter.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Rejected creation parameters.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    /// Translates a framework error for a request against product `id`.
    ///
    /// Entity errors are unwrapped back into their typed form; a missing key becomes
    /// [`ProductError::NotFound`].
    pub fn from_framework(id: ProductId, e: FrameworkError) -> Self {
        match e.downcast_entity::<ProductError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(_)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<ProductError>() {
            Ok(typed) => typed,
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
