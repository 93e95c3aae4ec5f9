//! Custom actions for the Product actor.
//!
//! These are the only operations that touch inventory. Each one is a single message to the
//! catalog actor, so a check and the mutation that follows it can never be split by another
//! request. They are handled by
//! [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action).

use rust_decimal::Decimal;

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes `quantity` units out of inventory and captures the unit price.
    ///
    /// # Errors
    /// Fails with [`ProductError::InsufficientInventory`](super::ProductError::InsufficientInventory)
    /// if the request exceeds available stock, and with
    /// [`ProductError::InvalidQuantity`](super::ProductError::InvalidQuantity) for zero.
    Reserve(u32),
    /// Puts `quantity` units back. Compensates an earlier `Reserve`.
    Release(u32),
}

/// Results from ProductActions. Variants match 1:1 with [`ProductAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    Stock(u32),
    Reserved { unit_price: Decimal, remaining: u32 },
    Released { available: u32 },
}
