use crate::config::ProviderConfig;
use crate::provider::{routes, ServerError};
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;
use warp::Filter;

/// A running Data Provider.
///
/// # Example
///
/// ```ignore
/// let server = ProviderServer::spawn(ProviderConfig::from_env()?)?;
/// tokio::signal::ctrl_c().await?;
/// server.shutdown().await?;
/// ```
pub struct ProviderServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl ProviderServer {
    /// Binds `0.0.0.0:{config.port}` and starts serving in a background task.
    pub fn spawn(config: ProviderConfig) -> Result<Self, ServerError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        Self::spawn_on(config, addr)
    }

    /// Like [`ProviderServer::spawn`] but on an explicit address. Port 0 picks a
    /// free port; see [`ProviderServer::addr`].
    pub fn spawn_on(config: ProviderConfig, addr: SocketAddr) -> Result<Self, ServerError> {
        let cors = warp::cors().allow_any_origin().allow_methods(vec!["GET"]);
        let filter = routes(&config)
            .with(cors)
            .with(warp::trace::request());

        let (shutdown, signal) = oneshot::channel::<()>();
        let (addr, server) = warp::serve(filter).try_bind_with_graceful_shutdown(addr, async move {
            let _ = signal.await;
        })?;
        info!(%addr, mode = %config.mode, "Data provider listening");

        let handle = tokio::spawn(server);
        Ok(Self {
            addr,
            shutdown,
            handle,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting connections and waits for in-flight requests to finish.
    pub async fn shutdown(self) -> Result<(), ServerError> {
        info!("Shutting down data provider...");
        let _ = self.shutdown.send(());
        self.handle.await?;
        info!("Data provider stopped");
        Ok(())
    }
}
