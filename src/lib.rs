#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Cart Store
//!
//! > **A persistent shopping cart behind a single-writer actor.**
//!
//! This crate keeps the cart of a storefront client: an ordered list of line items
//! with quantities, three mutations (add, increment, decrement), and a mirror of the
//! list in a key-value store so the cart survives restarts.
//!
//! ## 🏗️ Design
//!
//! ### One writer
//! The cart is owned by a [`StateActor`](framework::StateActor) running on its own
//! Tokio task. Every request goes through one channel and is handled to completion,
//! storage write included, before the next one starts. Rapid calls from many tasks
//! therefore never work from a stale copy of the cart.
//!
//! ### Explicit persistence
//! A mutation replies only after its storage write has finished, and the reply says
//! whether the write succeeded ([`CartUpdate::persisted`](cart_actor::CartUpdate)).
//! Storage failures are logged, never raised: the in-memory cart stays authoritative.
//!
//! ### Explicit lifecycle
//! [`CartSystem::start`](lifecycle::CartSystem::start) hydrates the cart from storage
//! before the first request and is the only way to get a
//! [`CartClient`](clients::CartClient).
//! [`CartSystem::shutdown`](lifecycle::CartSystem::shutdown) flushes and joins.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic single-writer actor, its client, and a mock for tests.
//! - **Key items**: [`ActorState`](framework::ActorState), [`StateActor`](framework::StateActor).
//!
//! ### 2. The Data ([`model`])
//! [`Cart`](model::Cart) and [`LineItem`](model::LineItem), with the pure mutation rules.
//!
//! ### 3. The Cart Actor ([`cart_actor`])
//! Hydration, actions, persistence and the policies for the legacy edge cases.
//!
//! ### 4. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient): `products`, `add_to_cart`, `increment`,
//! `decrement`, `flush`.
//!
//! ### 5. Storage ([`storage`]), Orchestration ([`lifecycle`]) and [`config`]
//! The key-value seam with memory and JSON-file backends, startup/shutdown, and
//! TOML + environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod storage;
