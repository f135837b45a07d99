//! The Data Provider: a small HTTP server answering the three fixed endpoints.

pub mod error;
pub mod routes;
pub mod server;

pub use error::*;
pub use routes::*;
pub use server::*;
