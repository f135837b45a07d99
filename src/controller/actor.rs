//! # View Controller
//!
//! The controller is a single tokio task that owns the [`SessionState`] and
//! processes requests one at a time, so two resources never load concurrently and
//! the cache needs no locks.
//!
//! ## Key Types
//!
//! - [`ViewController`]: the task that runs fetch-or-fallback for each resource.
//! - [`ControllerClient`]: the cloneable handle the rendering layer talks to.
//! - [`ControllerRequest`]: the messages between them.

use crate::clients::DataProvider;
use crate::config::ControllerSettings;
use crate::controller::deadline::fetch_within;
use crate::controller::{
    ControllerError, HostEnvironment, LoadOutcome, LoadState, Resource, SessionState,
};
use crate::model::{Catalog, Greeting, Profile, ResourceKind};
use crate::view::Tab;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// Type alias for the one-shot response channel used by the controller.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the controller.
#[derive(Debug)]
pub enum ControllerRequest {
    /// Load `kind` unless it is already cached.
    Load {
        kind: ResourceKind,
        respond_to: Response<LoadOutcome>,
    },
    /// Return a copy of the current session state.
    Snapshot { respond_to: Response<SessionState> },
}

/// The task half of the controller.
///
/// It owns the session state, the provider, and the receiver end of the request
/// channel. Every state transition is published on a `watch` channel so the
/// rendering layer can show a spinner while a load is in flight.
pub struct ViewController {
    receiver: mpsc::Receiver<ControllerRequest>,
    state: SessionState,
    provider: Arc<dyn DataProvider>,
    settings: ControllerSettings,
    publisher: watch::Sender<SessionState>,
    cancel: CancellationToken,
}

impl ViewController {
    pub fn new(
        buffer_size: usize,
        provider: Arc<dyn DataProvider>,
        settings: ControllerSettings,
    ) -> (Self, ControllerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (publisher, watcher) = watch::channel(SessionState::default());
        let controller = Self {
            receiver,
            state: SessionState::default(),
            provider,
            settings,
            publisher,
            cancel: CancellationToken::new(),
        };
        let client = ControllerClient::new(sender, watcher);
        (controller, client)
    }

    /// Token that aborts any in-flight fetch or simulated delay when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs the session: checks the environment, loads the greeting, then serves
    /// requests until every client is dropped.
    ///
    /// # Context Injection
    /// `host` is only known once the page is running, so it is passed here rather
    /// than to [`ViewController::new`].
    pub async fn run(mut self, host: HostEnvironment) {
        info!(%host, "Controller started");
        self.start_session(&host).await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ControllerRequest::Load { kind, respond_to } => {
                    let outcome = self.load(kind).await;
                    let _ = respond_to.send(outcome);
                }
                ControllerRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.state.clone());
                }
            }
        }

        info!(available = self.state.is_available(), "Shutdown");
    }

    async fn start_session(&mut self, host: &HostEnvironment) {
        // No provider behind a static host: degrade before any request
        if host.is_static_hosting(&self.settings.static_hosts) {
            info!(%host, "Static hosting detected, skipping provider check");
            self.state.degrade(format!("Static hosting environment ({})", host));
            *self.state.slot_mut::<Greeting>() = LoadState::FallenBack(Greeting::fallback());
            self.publish();
            return;
        }
        // The greeting request doubles as the reachability check
        let outcome = self.load_resource::<Greeting>(self.settings.greeting_timeout).await;
        info!(?outcome, available = self.state.is_available(), "Provider check finished");
    }

    async fn load(&mut self, kind: ResourceKind) -> LoadOutcome {
        let greeting_timeout = self.settings.greeting_timeout;
        let request_timeout = self.settings.request_timeout;
        match kind {
            ResourceKind::Greeting => self.load_resource::<Greeting>(greeting_timeout).await,
            ResourceKind::Profile => self.load_resource::<Profile>(request_timeout).await,
            ResourceKind::Catalog => self.load_resource::<Catalog>(request_timeout).await,
        }
    }

    /// Fetch-or-fallback for one resource.
    ///
    /// A settled resource is returned untouched. In a degraded session the
    /// fallback is assigned after the simulated delay without touching the
    /// provider. Otherwise the provider is asked under `bound`; any failure assigns
    /// the fallback and degrades the session.
    async fn load_resource<T: Resource>(&mut self, bound: Duration) -> LoadOutcome {
        let kind = T::KIND;
        // Settled states are terminal
        if self.state.get::<T>().is_settled() {
            debug!(%kind, "Cached");
            return LoadOutcome::Cached;
        }

        // Raise the loading flag for watchers
        *self.state.slot_mut::<T>() = LoadState::Loading;
        self.publish();

        let outcome = if self.state.is_available() {
            match fetch_within::<T>(self.provider.as_ref(), bound, &self.cancel).await {
                Ok(value) => {
                    info!(%kind, "Loaded from provider");
                    *self.state.slot_mut::<T>() = LoadState::Loaded(value);
                    LoadOutcome::Loaded
                }
                Err(e) => {
                    // Timeout and transport failures take the same path
                    warn!(%kind, error = %e, "Fetch failed, switching session to fallback data");
                    self.state.degrade(e.to_string());
                    *self.state.slot_mut::<T>() = LoadState::FallenBack(T::fallback());
                    LoadOutcome::FallenBack
                }
            }
        } else {
            // Already degraded: no request, just the simulated delay
            debug!(%kind, delay = ?self.settings.simulated_delay, "Degraded session, simulating load");
            tokio::select! {
                _ = tokio::time::sleep(self.settings.simulated_delay) => {}
                _ = self.cancel.cancelled() => {}
            }
            *self.state.slot_mut::<T>() = LoadState::FallenBack(T::fallback());
            info!(%kind, "Fallback assigned");
            LoadOutcome::FallenBack
        };

        // Clears the loading flag
        self.publish();
        outcome
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }
}

/// A cloneable handle for interacting with a [`ViewController`].
#[derive(Clone)]
pub struct ControllerClient {
    sender: mpsc::Sender<ControllerRequest>,
    watcher: watch::Receiver<SessionState>,
}

impl ControllerClient {
    pub fn new(
        sender: mpsc::Sender<ControllerRequest>,
        watcher: watch::Receiver<SessionState>,
    ) -> Self {
        Self { sender, watcher }
    }

    /// Loads `kind` unless it is already cached.
    ///
    /// Never fails because of the provider; see [`LoadOutcome`] for what happened.
    #[instrument(skip(self))]
    pub async fn load(&self, kind: ResourceKind) -> Result<LoadOutcome, ControllerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ControllerRequest::Load { kind, respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerDropped)
    }

    /// Tab activation: loads the resource the tab displays.
    pub async fn activate(&self, tab: Tab) -> Result<LoadOutcome, ControllerError> {
        self.load(tab.kind()).await
    }

    /// Current session state, after every earlier request has been processed.
    pub async fn snapshot(&self) -> Result<SessionState, ControllerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ControllerRequest::Snapshot { respond_to })
            .await
            .map_err(|_| ControllerError::ControllerClosed)?;
        response.await.map_err(|_| ControllerError::ControllerDropped)
    }

    /// Cached value of `T`, if it has settled.
    pub async fn value<T: Resource>(&self) -> Result<Option<T>, ControllerError> {
        let state = self.snapshot().await?;
        Ok(state.get::<T>().value().cloned())
    }

    /// Receiver that observes every state transition, including `Loading`.
    pub fn watch(&self) -> watch::Receiver<SessionState> {
        self.watcher.clone()
    }
}
