use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Message returned by the provider when it is reachable.
pub const LIVE_GREETING: &str = "Hello from Express server!";

/// Message substituted when the provider is absent or too slow.
pub const FALLBACK_GREETING: &str =
    "Hello from static fallback! The backend server is not available.";

/// The welcome message shown on the first tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The greeting the provider answers `/api/hello` with.
    pub fn live() -> Self {
        Self::new(LIVE_GREETING)
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_GREETING)
    }
}

impl Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
