//! Generic single-writer actor framework.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that a state value implements to be owned by an actor
//! - [`StateActor`] - Generic actor that owns the state and serializes every change
//! - [`StateClient`] - Type-safe, cloneable handle for sending requests
//! - [`FrameworkError`] - Errors from the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
