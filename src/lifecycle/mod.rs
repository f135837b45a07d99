//! # Lifecycle & Orchestration
//!
//! Wiring for the two halves of the demo:
//!
//! - [`ViewSession`] starts a [`ViewController`](crate::controller::ViewController)
//!   with its provider and host injected, and shuts it down cleanly.
//! - [`ProviderServer`](crate::provider::ProviderServer) does the same for the HTTP
//!   side and lives with the routes in [`provider`](crate::provider).
//! - [`setup_tracing`] initializes logging for either binary.
//!
//! ## Graceful Shutdown
//!
//! 1. **Cancel** - the session's token aborts any fetch or simulated delay
//! 2. **Drop the client** - closes the request channel
//! 3. **Controller exits** - `recv()` returns `None`, the final state is logged
//! 4. **Await the task** - a panic inside the controller surfaces as an error

pub mod tracing;
pub mod view_session;

pub use self::tracing::*;
pub use view_session::*;
