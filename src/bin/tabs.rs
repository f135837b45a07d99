//! # Tab Walkthrough
//!
//! Opens a view session against `API_BASE_URL`, activates Welcome, User and
//! Products in turn, and prints each tab. Every spinner transition is printed as
//! it happens. With no provider running the session degrades after the first
//! failure and the rest of the tabs show fallback data.
//!
//! ```bash
//! cargo run --bin tabs
//! PAGE_HOST=octocat.github.io cargo run --bin tabs   # static hosting, no requests
//! ```

use std::sync::Arc;
use tabbed_demo::clients::HttpProvider;
use tabbed_demo::config::ClientConfig;
use tabbed_demo::controller::HostEnvironment;
use tabbed_demo::lifecycle::{setup_tracing, ViewSession};
use tabbed_demo::model::ResourceKind;
use tabbed_demo::view::{render, Tab, SPINNER};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = ClientConfig::from_env();
    info!(base_url = %config.api_base_url, host = %config.page_host, "Opening view session");

    let provider = HttpProvider::new(config.api_base_url.clone()).map_err(|e| e.to_string())?;
    let session = ViewSession::start(
        Arc::new(provider),
        config.settings.clone(),
        HostEnvironment::new(config.page_host.clone()),
    );

    let mut watcher = session.client.watch();
    let spinner = tokio::spawn(async move {
        while watcher.changed().await.is_ok() {
            let state = watcher.borrow_and_update().clone();
            for kind in ResourceKind::ALL {
                if state.is_loading(kind) {
                    println!("[{}] {}", Tab::from(kind), SPINNER);
                }
            }
        }
    });

    for tab in Tab::ALL {
        let span = tracing::info_span!("tab", %tab);
        let outcome = async { session.client.activate(tab).await }
            .instrument(span)
            .await
            .map_err(|e| e.to_string())?;
        info!(%tab, ?outcome, "Tab activated");

        let state = session.client.snapshot().await.map_err(|e| e.to_string())?;
        println!("{}\n", render(tab, &state));
    }

    session.shutdown().await?;
    spinner.abort();
    Ok(())
}
