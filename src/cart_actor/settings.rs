//! Behavior switches for the cart actor.

use serde::Deserialize;

use crate::storage::CART_STORAGE_KEY;

/// What `increment`/`decrement` do with an id that is not in the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingItemPolicy {
    /// Log and leave the cart untouched.
    #[default]
    Ignore,
    /// Fail with [`CartError::NotInCart`](crate::cart_actor::CartError::NotInCart).
    Reject,
}

/// Which snapshot of the cart gets written after a mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistSnapshot {
    /// Always write the cart as it is after the mutation.
    #[default]
    Current,
    /// When a mutation appends or removes a line, write the cart as it was before
    /// the mutation. Quantity changes on existing lines are written as they are.
    ///
    /// Matches the stale writes of the legacy mobile storefront, for parity tests
    /// against data it produced.
    PriorOnResize,
}

/// Runtime settings injected into the cart actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSettings {
    pub storage_key: String,
    pub missing_item: MissingItemPolicy,
    pub persist_snapshot: PersistSnapshot,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            storage_key: CART_STORAGE_KEY.to_string(),
            missing_item: MissingItemPolicy::default(),
            persist_snapshot: PersistSnapshot::default(),
        }
    }
}
