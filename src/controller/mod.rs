//! The view controller: per-resource fetch-or-fallback with a sticky degraded
//! mode.
//!
//! # Main Components
//!
//! - [`Resource`] - Trait tying a model type to its endpoint, fallback and slot
//! - [`ViewController`] - Task owning the session state
//! - [`ControllerClient`] - Handle used by the rendering layer
//! - [`SessionState`] / [`Availability`] - What the rendering layer observes
//!
//! # Testing
//!
//! See [`mock`] for an in-memory [`DataProvider`](crate::clients::DataProvider).

pub mod actor;
pub mod deadline;
pub mod error;
pub mod host;
pub mod mock;
pub mod resource;
pub mod session;

pub use actor::*;
pub use error::*;
pub use host::*;
pub use resource::*;
pub use session::*;
