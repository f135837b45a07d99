//! # Configuration
//!
//! Both binaries read their settings from environment variables (a `.env` file is
//! loaded first by `main`). Parsing goes through a lookup closure so tests can
//! supply values without touching the process environment.
//!
//! | Variable | Default | Used by |
//! |---|---|---|
//! | `PORT` | `3001` | provider |
//! | `APP_MODE` | `development` | provider |
//! | `STATIC_DIR` | `dist` | provider |
//! | `API_BASE_URL` | `http://localhost:3001` | walkthrough |
//! | `PAGE_HOST` | `localhost` | walkthrough |
//! | `STATIC_HOSTS` | `github.io` | walkthrough |

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3001;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid APP_MODE value: {0} (expected \"development\" or \"production\")")]
    InvalidMode(String),
}

/// Whether the provider also serves the prebuilt front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Development,
    /// Serve `STATIC_DIR` and answer every unmatched path with its `index.html`.
    Production,
}

impl FromStr for AppMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" => Ok(AppMode::Development),
            "production" => Ok(AppMode::Production),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl Display for AppMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppMode::Development => f.write_str("development"),
            AppMode::Production => f.write_str("production"),
        }
    }
}

/// Artificial latency per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDelays {
    pub hello: Duration,
    pub user: Duration,
    pub products: Duration,
}

impl Default for EndpointDelays {
    fn default() -> Self {
        Self {
            hello: Duration::from_millis(1000),
            user: Duration::from_millis(2000),
            products: Duration::from_millis(3000),
        }
    }
}

impl EndpointDelays {
    /// No latency at all; handy in tests.
    pub fn none() -> Self {
        Self {
            hello: Duration::ZERO,
            user: Duration::ZERO,
            products: Duration::ZERO,
        }
    }
}

/// Settings for the Data Provider process.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub port: u16,
    pub mode: AppMode,
    pub static_dir: PathBuf,
    pub delays: EndpointDelays,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mode: AppMode::default(),
            static_dir: PathBuf::from("dist"),
            delays: EndpointDelays::default(),
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(mode) = lookup("APP_MODE") {
            config.mode = mode.parse()?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}

/// Timing and environment rules for the view controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    /// Bound on the greeting request at session start.
    pub greeting_timeout: Duration,
    /// Bound on profile and catalog requests.
    pub request_timeout: Duration,
    /// Pause before a fallback is assigned in a degraded session.
    pub simulated_delay: Duration,
    /// Host suffixes identifying static hosting without a provider.
    pub static_hosts: Vec<String>,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            greeting_timeout: Duration::from_millis(3000),
            request_timeout: Duration::from_millis(3000),
            simulated_delay: Duration::from_millis(1000),
            static_hosts: vec!["github.io".to_string()],
        }
    }
}

/// Settings for the tab walkthrough binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub page_host: String,
    pub settings: ControllerSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: format!("http://localhost:{}", DEFAULT_PORT),
            page_host: "localhost".to_string(),
            settings: ControllerSettings::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(host) = lookup("PAGE_HOST") {
            config.page_host = host;
        }
        if let Some(hosts) = lookup("STATIC_HOSTS") {
            config.settings.static_hosts = hosts
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(String::from)
                .collect();
        }
        config
    }
}
