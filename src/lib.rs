//! # Tabbed Demo
//!
//! A three-tab page (Welcome, User, Products) backed by a tiny HTTP Data Provider,
//! with a client-side view controller that degrades to fixed fallback data when
//! the provider is absent or slow.
//!
//! ## 🚀 Core Concepts
//!
//! ### Fetch-or-Fallback
//! Every resource goes `Unloaded -> Loading -> {Loaded | FallenBack}` exactly once
//! per session. A request that fails or misses its deadline assigns the fallback
//! and marks the whole session degraded; from then on no request is sent and each
//! remaining tab gets its fallback after a short simulated delay.
//!
//! ### One Task, No Locks
//! The [`ViewController`](controller::ViewController) is a single tokio task that
//! owns the session state and handles requests in order. The rendering layer holds
//! a cloneable [`ControllerClient`](controller::ControllerClient) and a `watch`
//! receiver for live loading state.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: `Greeting`, `Profile`, `Catalog` and their fixed values.
//! - [`clients`]: the [`DataProvider`](clients::DataProvider) seam and its HTTP
//!   implementation.
//! - [`controller`]: the fetch-or-fallback state machine, plus
//!   [`mock`](controller::mock) for tests.
//! - [`view`]: tabs and their text rendering.
//! - [`provider`]: the `warp` server answering `/api/*`.
//! - [`lifecycle`]: session orchestration and tracing setup.
//! - [`config`]: environment-driven settings.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run             # start the provider on :3001
//! RUST_LOG=info cargo run --bin tabs  # walk through the tabs
//! ```

pub mod clients;
pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod model;
pub mod provider;
pub mod view;
