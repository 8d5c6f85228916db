//! # ActorState Trait
//!
//! The contract a value must satisfy to be owned by a [`StateActor`](crate::framework::StateActor).
//!
//! The actor owns exactly one value of the implementing type and is its only writer.
//! Every change to the value goes through [`ActorState::handle_action`], which runs
//! to completion (including any awaited side effects such as persistence) before the
//! next request is taken off the channel.
//!
//! # Provided Methods (Hooks)
//! - [`ActorState::on_start`] runs once before the first request is served.
//! - [`ActorState::on_stop`] runs once after the last client is dropped.
//!
//! Both default to doing nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any state value must implement to be managed by `StateActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await I/O. The `Context` type is injected
/// into every hook by `run()`, so dependencies (a storage handle, settings) are bound
/// late instead of at construction time.
#[async_trait]
pub trait ActorState: Clone + Send + Sync + 'static {
    /// Enum of the operations the state accepts.
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    ///
    /// One error enum covers every action, so clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    // --- Lifecycle Hooks (Async) ---

    /// Called once when the actor starts, before any request is processed.
    async fn on_start(&mut self, _ctx: &Self::Context) {}

    /// Called once when the request channel has closed.
    async fn on_stop(&mut self, _ctx: &Self::Context) {}

    // --- Action Handler (Async) ---

    /// Apply an action to the state.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
