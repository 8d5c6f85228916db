//! Actions for the Cart actor.
//!
//! Every variant is handled by
//! [`ActorState::handle_action`](crate::framework::ActorState::handle_action) in
//! [`entity`](super::entity).

use crate::model::{LineItem, NewLineItem, ProductId};

/// Operations accepted by the cart.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one unit of a product, appending a new line if needed.
    AddToCart(NewLineItem),
    /// Add one unit to an existing line.
    Increment(ProductId),
    /// Remove one unit from an existing line, dropping it at zero.
    Decrement(ProductId),
    /// Write the current cart to storage.
    Flush,
}

/// Results from CartActions.
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// Result of `AddToCart`, `Increment` and `Decrement`.
    Updated(CartUpdate),
    /// Result of `Flush`: whether the write succeeded.
    Flushed(bool),
}

/// Outcome of a mutation, sent once its storage write has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct CartUpdate {
    /// The cart after the call.
    pub items: Vec<LineItem>,
    /// False when the call was an ignored missing-id request.
    pub changed: bool,
    /// Whether the storage write for this call succeeded. No write happens when
    /// nothing changed.
    pub persisted: bool,
}
