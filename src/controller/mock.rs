//! # Mock Provider & Testing Guide
//!
//! [`MockProvider`] implements [`DataProvider`] entirely in memory. Tests queue
//! expectations in the order fetches should arrive, optionally delay each answer,
//! and inspect which kinds were requested.
//!
//! | Feature | MockProvider | Real server |
//! |---------|--------------|-------------|
//! | **Speed** | Instant, or virtual time with `start_paused` | Real sockets and sleeps |
//! | **Error Injection** | `return_err` | Stop the server |
//! | **Call Inspection** | `calls()` | Not available |
//!
//! ```rust
//! use std::time::Duration;
//! use tabbed_demo::controller::mock::MockProvider;
//! use tabbed_demo::model::{Greeting, ResourceKind};
//!
//! let mock = MockProvider::new();
//! mock.expect_fetch(ResourceKind::Greeting)
//!     .after(Duration::from_millis(1000))
//!     .return_ok(Greeting::live());
//! let provider = mock.provider();
//! # drop(provider);
//! ```
//!
//! A fetch with no queued expectation fails with a transport error instead of
//! panicking, so "no network call happened" can be asserted with `calls()`.

use crate::clients::{DataProvider, FetchError};
use crate::model::ResourceKind;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
struct Expectation {
    kind: ResourceKind,
    delay: Option<Duration>,
    response: Result<serde_json::Value, FetchError>,
}

/// In-memory [`DataProvider`] driven by queued expectations.
#[derive(Clone, Default)]
pub struct MockProvider {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<ResourceKind>>>,
}

impl MockProvider {
    /// Creates a new mock provider with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shareable handle for wiring into a controller.
    pub fn provider(&self) -> Arc<dyn DataProvider> {
        Arc::new(self.clone())
    }

    /// Expects a fetch of `kind`.
    pub fn expect_fetch(&self, kind: ResourceKind) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            kind,
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Every fetch received so far, in order, including unexpected ones.
    pub fn calls(&self) -> Vec<ResourceKind> {
        self.calls.lock().expect("mock calls poisoned").clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("mock expectations poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl DataProvider for MockProvider {
    async fn fetch(&self, kind: ResourceKind) -> Result<serde_json::Value, FetchError> {
        self.calls.lock().expect("mock calls poisoned").push(kind);
        let expectation = {
            let mut exps = self.expectations.lock().expect("mock expectations poisoned");
            exps.pop_front()
        };

        match expectation {
            Some(exp) if exp.kind == kind => {
                if let Some(delay) = exp.delay {
                    tokio::time::sleep(delay).await;
                }
                exp.response
            }
            Some(exp) => panic!("Expected fetch of {} but got {}", exp.kind, kind),
            None => Err(FetchError::Transport(format!("Unexpected fetch of {}", kind))),
        }
    }
}

/// Builder for `fetch` expectations.
pub struct FetchExpectationBuilder {
    kind: ResourceKind,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl FetchExpectationBuilder {
    /// Answers only after `delay` has passed.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return `body` serialized as JSON.
    pub fn return_ok(self, body: impl Serialize) {
        let value = serde_json::to_value(body).expect("mock body must serialize");
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FetchError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<serde_json::Value, FetchError>) {
        let mut exps = self.expectations.lock().expect("mock expectations poisoned");
        exps.push_back(Expectation {
            kind: self.kind,
            delay: self.delay,
            response,
        });
    }
}
