//! Error types for the Data Provider server.

use thiserror::Error;

/// Errors that can occur while running the provider.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("Failed to bind provider: {0}")]
    Bind(#[from] warp::Error),

    /// The server task panicked or was aborted.
    #[error("Provider task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
