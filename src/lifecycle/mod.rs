//! Runtime orchestration and lifecycle management.
//!
//! - [`CartSystem`] - Starts the cart actor over a storage backend, hands out
//!   clients and flushes on shutdown
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use self::tracing::*;
