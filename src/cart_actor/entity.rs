//! ActorState implementation for the [`Cart`].
//!
//! The actor hydrates the cart from storage in `on_start`, writes it after every
//! mutation, and writes it once more in `on_stop`. Storage problems are logged at
//! `warn` and never fail a request.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::actions::{CartAction, CartActionResult, CartUpdate};
use super::error::CartError;
use super::settings::{CartSettings, MissingItemPolicy, PersistSnapshot};
use crate::framework::ActorState;
use crate::model::{Cart, Mutation, ProductId};
use crate::storage::KeyValueStore;

/// Dependencies injected into the cart actor at `run()`.
#[derive(Clone)]
pub struct CartContext {
    pub store: Arc<dyn KeyValueStore>,
    pub settings: CartSettings,
}

impl CartContext {
    pub fn new(store: Arc<dyn KeyValueStore>, settings: CartSettings) -> Self {
        Self { store, settings }
    }
}

#[async_trait]
impl ActorState for Cart {
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CartContext;
    type Error = CartError;

    /// Replaces the cart with whatever is stored, or leaves it empty.
    async fn on_start(&mut self, ctx: &CartContext) {
        *self = load(ctx).await;
    }

    async fn on_stop(&mut self, ctx: &CartContext) {
        let persisted = persist(self, ctx).await;
        info!(items = self.len(), persisted, "Cart flushed");
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, CartError> {
        let prior = self.prior_snapshot(ctx);
        let update = match action {
            CartAction::AddToCart(item) => {
                let id = item.id.clone();
                let mutation = self.add(item)?;
                self.commit(&id, mutation, prior, ctx).await
            }
            CartAction::Increment(id) => match self.increment(&id)? {
                Some(mutation) => self.commit(&id, mutation, prior, ctx).await,
                None => self.missing(id, ctx)?,
            },
            CartAction::Decrement(id) => match self.decrement(&id) {
                Some(mutation) => self.commit(&id, mutation, prior, ctx).await,
                None => self.missing(id, ctx)?,
            },
            CartAction::Flush => return Ok(CartActionResult::Flushed(persist(self, ctx).await)),
        };
        Ok(CartActionResult::Updated(update))
    }
}

impl Cart {
    fn prior_snapshot(&self, ctx: &CartContext) -> Option<Cart> {
        (ctx.settings.persist_snapshot == PersistSnapshot::PriorOnResize).then(|| self.clone())
    }

    async fn commit(
        &self,
        id: &ProductId,
        mutation: Mutation,
        prior: Option<Cart>,
        ctx: &CartContext,
    ) -> CartUpdate {
        let quantity = self.get(id).map_or(0, |item| item.quantity);
        info!(%id, ?mutation, quantity, items = self.len(), "Cart updated");

        let snapshot = match &prior {
            Some(prior) if mutation.resizes() => prior,
            _ => self,
        };
        let persisted = persist(snapshot, ctx).await;

        CartUpdate {
            items: self.items().to_vec(),
            changed: true,
            persisted,
        }
    }

    fn missing(&self, id: ProductId, ctx: &CartContext) -> Result<CartUpdate, CartError> {
        match ctx.settings.missing_item {
            MissingItemPolicy::Ignore => {
                warn!(%id, "Not in cart, ignoring");
                Ok(CartUpdate {
                    items: self.items().to_vec(),
                    changed: false,
                    persisted: false,
                })
            }
            MissingItemPolicy::Reject => Err(CartError::NotInCart(id)),
        }
    }
}

async fn load(ctx: &CartContext) -> Cart {
    let key = ctx.settings.storage_key.as_str();
    match ctx.store.get(key).await {
        Ok(Some(text)) => match Cart::from_json(&text) {
            Ok(cart) => {
                info!(key, items = cart.len(), "Cart loaded");
                cart
            }
            Err(e) => {
                warn!(key, error = %e, "Stored cart is unreadable, starting empty");
                Cart::new()
            }
        },
        Ok(None) => {
            debug!(key, "No stored cart");
            Cart::new()
        }
        Err(e) => {
            warn!(key, error = %e, "Cart load failed, starting empty");
            Cart::new()
        }
    }
}

async fn persist(cart: &Cart, ctx: &CartContext) -> bool {
    let key = ctx.settings.storage_key.as_str();
    let text = match cart.to_json() {
        Ok(text) => text,
        Err(e) => {
            warn!(key, error = %e, "Cart serialization failed");
            return false;
        }
    };
    match ctx.store.set(key, text).await {
        Ok(()) => {
            debug!(key, items = cart.len(), "Cart persisted");
            true
        }
        Err(e) => {
            warn!(key, error = %e, "Cart persist failed");
            false
        }
    }
}
