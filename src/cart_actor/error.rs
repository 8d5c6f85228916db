//! Error types for the Cart actor.

use thiserror::Error;

use crate::model::{ProductId, QuantityOverflow};

/// Errors that can occur during cart operations.
///
/// Storage failures are deliberately absent: they are logged and reported through
/// [`CartUpdate::persisted`](crate::cart_actor::CartUpdate::persisted), never raised.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The product is not in the cart (only with `MissingItemPolicy::Reject`).
    #[error("Product not in cart: {0}")]
    NotInCart(ProductId),

    /// The line's quantity is already at its maximum.
    #[error("Quantity overflow for product: {0}")]
    QuantityOverflow(ProductId),

    /// The cart actor is not running (never started or already shut down).
    #[error("Cart store unavailable: {0}")]
    StoreUnavailable(String),

    /// An error from the actor that is not a cart error.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<QuantityOverflow> for CartError {
    fn from(QuantityOverflow(id): QuantityOverflow) -> Self {
        CartError::QuantityOverflow(id)
    }
}
