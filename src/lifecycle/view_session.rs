use crate::clients::DataProvider;
use crate::config::ControllerSettings;
use crate::controller::{ControllerClient, HostEnvironment, ViewController};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// One page session: a running [`ViewController`] and the client that drives it.
///
/// `ViewSession` is responsible for:
/// - **Startup**: spawning the controller task with the page's host injected
/// - **Shutdown**: cancelling in-flight work, closing the channel, awaiting the task
///
/// # Example
///
/// ```ignore
/// let session = ViewSession::start(provider, ControllerSettings::default(), host);
/// session.client.activate(Tab::User).await?;
/// session.shutdown().await?;
/// ```
pub struct ViewSession {
    /// Client for interacting with the controller
    pub client: ControllerClient,

    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl ViewSession {
    /// Spawns the controller. The greeting request (or the static-hosting shortcut)
    /// starts immediately.
    pub fn start(
        provider: Arc<dyn DataProvider>,
        settings: ControllerSettings,
        host: HostEnvironment,
    ) -> Self {
        let (controller, client) = ViewController::new(32, provider, settings);
        let cancel = controller.cancellation_token();
        let handle = tokio::spawn(controller.run(host));
        Self {
            client,
            cancel,
            handle,
        }
    }

    /// Gracefully shuts down the session.
    ///
    /// In-flight fetches resolve as failures, so any resource still loading ends
    /// up with its fallback. Clones of the client kept elsewhere keep the task
    /// alive until they are dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down view session...");
        self.cancel.cancel();
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Controller task failed: {:?}", e);
            return Err(format!("Controller task failed: {:?}", e));
        }

        info!("View session shutdown complete.");
        Ok(())
    }
}
