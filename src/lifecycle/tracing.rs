//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt subscriber filtered by
//! `RUST_LOG`, in the compact format and without module targets.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, hydration, final flush, shutdown
//! - **Cart Operations**: every mutation with the product id, the mutation kind and
//!   the resulting quantity
//! - **Swallowed Failures**: storage read/write errors and unreadable stored carts,
//!   at `warn`
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and mutations
//! RUST_LOG=debug cargo run     # plus payloads and every storage write
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Starting cart system key=@GoMarketplace buffer_size=32
//! INFO Actor started state_type="Cart"
//! INFO Cart loaded key="@GoMarketplace" items=1
//! INFO add_to_cart{id=1}: Cart updated id=1 mutation=Incremented quantity=2 items=1
//! INFO Cart flushed items=1 persisted=true
//! ```

/// Initializes the tracing/logging infrastructure for the application.
///
/// Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add nothing; events carry their own fields
        .compact()
        .init();
}
