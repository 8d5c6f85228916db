use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::cart_actor::{self, CartContext, CartError, CartSettings};
use crate::clients::CartClient;
use crate::config::{CartConfig, ConfigError};
use crate::model::Cart;
use crate::storage::{JsonFileStore, KeyValueStore, StorageError};

/// Reasons [`CartSystem::open`] can fail before the actor is spawned.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The runtime owner of the cart.
///
/// `CartSystem` is responsible for:
/// - **Startup**: spawning the cart actor with its storage and settings, which
///   hydrates the cart before serving the first request
/// - **Access**: handing out [`CartClient`]s, the only way to reach the cart
/// - **Teardown**: closing the channel, letting the actor flush to storage, and
///   joining its task
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::start(Arc::new(MemoryStore::new()), CartSettings::default(), 32);
///
/// system.cart_client.add_to_cart(item).await?;
///
/// // Flushes the cart and returns its final state
/// let cart = system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    /// Task running the actor; resolves to the final cart
    handle: tokio::task::JoinHandle<Cart>,
}

impl CartSystem {
    /// Spawns the cart actor over `store`. Must be called inside a Tokio runtime.
    pub fn start(store: Arc<dyn KeyValueStore>, settings: CartSettings, buffer_size: usize) -> Self {
        info!(key = %settings.storage_key, buffer_size, "Starting cart system");
        let (actor, generic_client) = cart_actor::new(buffer_size);
        let handle = tokio::spawn(actor.run(CartContext::new(store, settings)));

        Self {
            cart_client: CartClient::new(generic_client),
            handle,
        }
    }

    /// Validates `config`, then spawns the cart actor over `store` with its settings.
    pub fn with_config(
        config: &CartConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(store, config.settings(), config.buffer_size))
    }

    /// Validates `config`, opens the JSON file store at `config.storage_path` and
    /// starts over it.
    pub async fn open(config: &CartConfig) -> Result<Self, StartupError> {
        config.validate()?;
        let store = JsonFileStore::open(&config.storage_path).await?;
        Ok(Self::with_config(config, Arc::new(store))?)
    }

    /// A new handle to the cart.
    pub fn client(&self) -> CartClient {
        self.cart_client.clone()
    }

    /// Gracefully shuts down the cart.
    ///
    /// Dropping the system's client closes the channel once every other clone
    /// handed out by [`client`](Self::client) has been dropped too; until then this
    /// waits. The actor then drains queued requests, writes the cart to storage and
    /// exits.
    ///
    /// # Returns
    ///
    /// The final cart, or an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<Cart, CartError> {
        info!("Shutting down cart system...");

        drop(self.cart_client);

        match self.handle.await {
            Ok(cart) => {
                info!(items = cart.len(), "Cart system shutdown complete.");
                Ok(cart)
            }
            Err(e) => {
                error!("Cart actor task failed: {:?}", e);
                Err(CartError::ActorCommunicationError(format!(
                    "Cart actor task failed: {e}"
                )))
            }
        }
    }
}
