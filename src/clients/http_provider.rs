//! # HTTP Provider
//!
//! Fetches resource payloads from a running Data Provider over HTTP.
use crate::clients::{DataProvider, FetchError};
use crate::model::ResourceKind;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

/// Client for the Data Provider's `/api/*` endpoints.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
}

impl HttpProvider {
    /// Creates a provider rooted at `base_url` (e.g. `http://localhost:3001`).
    ///
    /// No client-level timeout is set; the controller bounds every request with
    /// its own deadline.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("tabbed-demo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, kind: ResourceKind) -> String {
        format!("{}{}", self.base_url, kind.path())
    }
}

#[async_trait]
impl DataProvider for HttpProvider {
    #[instrument(skip(self))]
    async fn fetch(&self, kind: ResourceKind) -> Result<serde_json::Value, FetchError> {
        let url = self.url_for(kind);
        debug!(%url, "Sending request");
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        Ok(body)
    }
}
