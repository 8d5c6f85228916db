//! # Cart Actor
//!
//! The single writer of the cart. Every mutation is applied and persisted before the
//! next request is read, so calls from any number of tasks never overwrite each
//! other.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorState`](crate::framework::ActorState) implementation for [`Cart`]
//! - [`actions`] - [`CartAction`], [`CartActionResult`] and [`CartUpdate`]
//! - [`settings`] - [`CartSettings`] and the missing-id / snapshot policies
//! - [`error`] - [`CartError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cart_store::cart_actor::{self, CartContext, CartSettings};
//! use cart_store::clients::CartClient;
//! use cart_store::model::NewLineItem;
//! use cart_store::storage::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new(32);
//!     let client = CartClient::new(generic_client);
//!
//!     let ctx = CartContext::new(Arc::new(MemoryStore::new()), CartSettings::default());
//!     tokio::spawn(actor.run(ctx));
//!
//!     client.add_to_cart(NewLineItem::new("1", "A", "u", 10.0)).await?;
//!     assert_eq!(client.products().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod settings;

pub use actions::*;
pub use entity::CartContext;
pub use error::*;
pub use settings::*;

use crate::framework::{StateActor, StateClient};
use crate::model::Cart;

/// Creates a new Cart actor, starting from an empty cart, and its client.
pub fn new(buffer_size: usize) -> (StateActor<Cart>, StateClient<Cart>) {
    StateActor::new(buffer_size, Cart::new())
}
