//! # DataProvider Trait
//!
//! The seam between the view controller and wherever resource payloads come from.
//! Production code talks HTTP through [`HttpProvider`](super::HttpProvider); tests
//! use [`MockProvider`](crate::controller::mock::MockProvider).
use crate::model::ResourceKind;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Why a fetch did not produce a payload.
///
/// The controller handles both variants the same way: fallback value plus a
/// degraded session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The request did not complete before its deadline.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, HTTP status, cancellation or decode failure.
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Transport(format!("Malformed payload: {}", e))
    }
}

/// Source of raw resource payloads.
///
/// Implementations return the JSON body for `kind` and leave decoding to the
/// caller, which keeps the trait object-safe.
#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn fetch(&self, kind: ResourceKind) -> Result<serde_json::Value, FetchError>;
}
