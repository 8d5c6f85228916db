//! Pure data structures for the cart.
//!
//! [`Cart`] implements the [`ActorState`](crate::framework::ActorState) trait in
//! [`cart_actor::entity`](crate::cart_actor::entity).

pub mod cart;
pub mod line_item;

pub use cart::*;
pub use line_item::*;
