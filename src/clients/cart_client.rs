//! # Cart Client
//!
//! The consumer-facing API of the cart. It wraps a `StateClient<Cart>` and exposes
//! the storefront operations with typed results.
use crate::cart_actor::{CartAction, CartActionResult, CartError, CartUpdate};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::model::{Cart, LineItem, NewLineItem, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
///
/// Only obtainable from a running actor (see
/// [`CartSystem`](crate::lifecycle::CartSystem)); after the actor stops every call
/// fails with [`CartError::StoreUnavailable`].
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<Cart>,
}

impl CartClient {
    pub fn new(inner: StateClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StateError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            closed => CartError::StoreUnavailable(closed.to_string()),
        }
    }
}

impl CartClient {
    /// Current line items, in insertion order.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<LineItem>, CartError> {
        Ok(self.snapshot().await?.into_items())
    }

    /// Add one unit of a product.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn add_to_cart(&self, item: NewLineItem) -> Result<CartUpdate, CartError> {
        debug!(?item, "add_to_cart called");
        self.update(CartAction::AddToCart(item)).await
    }

    /// Add one unit to the line for `id`.
    #[instrument(skip(self, id))]
    pub async fn increment(&self, id: impl Into<ProductId>) -> Result<CartUpdate, CartError> {
        let id = id.into();
        debug!(%id, "Sending request");
        self.update(CartAction::Increment(id)).await
    }

    /// Remove one unit from the line for `id`, dropping the line at zero.
    #[instrument(skip(self, id))]
    pub async fn decrement(&self, id: impl Into<ProductId>) -> Result<CartUpdate, CartError> {
        let id = id.into();
        debug!(%id, "Sending request");
        self.update(CartAction::Decrement(id)).await
    }

    /// Write the current cart to storage. Returns whether the write succeeded.
    #[instrument(skip(self))]
    pub async fn flush(&self) -> Result<bool, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(CartAction::Flush)
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::Flushed(persisted) => Ok(persisted),
            other => Err(CartError::ActorCommunicationError(format!(
                "Unexpected result for Flush: {other:?}"
            ))),
        }
    }

    async fn update(&self, action: CartAction) -> Result<CartUpdate, CartError> {
        match self
            .inner
            .perform_action(action)
            .await
            .map_err(Self::map_error)?
        {
            CartActionResult::Updated(update) => Ok(update),
            other => Err(CartError::ActorCommunicationError(format!(
                "Unexpected result for mutation: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};

    fn update_with(items: Vec<LineItem>) -> CartUpdate {
        CartUpdate {
            items,
            changed: true,
            persisted: true,
        }
    }

    #[tokio::test]
    async fn test_add_to_cart_sends_payload() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move {
            cart_client
                .add_to_cart(NewLineItem::new("1", "A", "u", 10.0))
                .await
        });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        let item = match action {
            CartAction::AddToCart(item) => item,
            other => panic!("Expected AddToCart, got {other:?}"),
        };
        assert_eq!(item.id, ProductId::from("1"));

        let line = item.into_line_item();
        responder
            .send(Ok(CartActionResult::Updated(update_with(vec![line.clone()]))))
            .unwrap();

        let update = task.await.unwrap().unwrap();
        assert_eq!(update.items, vec![line]);
    }

    #[tokio::test]
    async fn test_decrement_forwards_id() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let task = tokio::spawn(async move { cart_client.decrement("42").await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, CartAction::Decrement(ref id) if id.0 == "42"));
        responder
            .send(Ok(CartActionResult::Updated(update_with(vec![]))))
            .unwrap();

        assert!(task.await.unwrap().unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_cart_errors_survive_the_actor_boundary() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action()
            .return_err(FrameworkError::StateError(Box::new(CartError::NotInCart(
                "9".into(),
            ))));
        mock.expect_action()
            .return_err(FrameworkError::StateError(Box::new(std::io::Error::other(
                "boom",
            ))));

        let cart_client = CartClient::new(mock.client());
        assert_eq!(
            cart_client.increment("9").await,
            Err(CartError::NotInCart("9".into()))
        );
        assert!(matches!(
            cart_client.increment("9").await,
            Err(CartError::ActorCommunicationError(msg)) if msg.contains("boom")
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let mut mock = MockClient::<Cart>::new();
        mock.expect_action().return_ok(CartActionResult::Flushed(true));

        let cart_client = CartClient::new(mock.client());
        assert!(matches!(
            cart_client.increment("1").await,
            Err(CartError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_unavailable() {
        let (client, receiver) = create_mock_client::<Cart>(1);
        drop(receiver);

        let cart_client = CartClient::new(client);
        assert!(matches!(
            cart_client.products().await,
            Err(CartError::StoreUnavailable(_))
        ));
        assert!(matches!(
            cart_client.add_to_cart(NewLineItem::new("1", "A", "u", 1.0)).await,
            Err(CartError::StoreUnavailable(_))
        ));
    }
}
