//! # Cart Store Demo
//!
//! Runs the cart against the JSON file store named in the configuration (see
//! [`cart_store::config`]) and walks through the storefront operations. Run it
//! twice to see the cart hydrate from the previous run.

use cart_store::config::CartConfig;
use cart_store::lifecycle::{setup_tracing, CartSystem};
use cart_store::model::NewLineItem;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = CartConfig::load()?;
    info!(path = %config.storage_path.display(), "Starting cart demo");

    let system = CartSystem::open(&config).await?;
    let cart = system.client();

    let restored = cart.products().await?;
    info!(lines = restored.len(), "Cart restored");

    let span = tracing::info_span!("shopping");
    async {
        let shoe = NewLineItem::new("1", "Running shoe", "https://img.example/shoe.png", 129.9);
        let cap = NewLineItem::new("2", "Cap", "https://img.example/cap.png", 24.5);

        cart.add_to_cart(shoe.clone()).await?;
        cart.add_to_cart(cap).await?;
        cart.add_to_cart(shoe).await?;
        cart.increment("2").await?;
        let update = cart.decrement("1").await?;
        info!(lines = update.items.len(), persisted = update.persisted, "Cart after shopping");
        Ok::<_, cart_store::cart_actor::CartError>(())
    }
    .instrument(span)
    .await?;

    drop(cart);
    let final_cart = system.shutdown().await?;
    info!(
        lines = final_cart.len(),
        quantity = final_cart.total_quantity(),
        subtotal = final_cart.subtotal(),
        "Demo complete"
    );
    Ok(())
}
