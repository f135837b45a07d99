//! # Provider Routes
//!
//! Three fixed GET endpoints, each answering after its configured delay, plus an
//! optional single-page-app file server for production mode.

use crate::config::{AppMode, EndpointDelays, ProviderConfig};
use crate::model::{Catalog, Greeting, Profile};
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use warp::filters::BoxedFilter;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

/// Every route the provider serves for `config`.
pub fn routes(config: &ProviderConfig) -> BoxedFilter<(Response,)> {
    let api = api_routes(config.delays);
    match config.mode {
        AppMode::Development => api,
        AppMode::Production => api
            .or(static_assets(&config.static_dir))
            .unify()
            .boxed(),
    }
}

/// `/api/hello`, `/api/user` and `/api/products`.
pub fn api_routes(delays: EndpointDelays) -> BoxedFilter<(Response,)> {
    let hello = warp::path!("api" / "hello")
        .and(warp::get())
        .and_then(move || serve_greeting(delays.hello));
    let user = warp::path!("api" / "user")
        .and(warp::get())
        .and_then(move || serve_profile(delays.user));
    let products = warp::path!("api" / "products")
        .and(warp::get())
        .and_then(move || serve_catalog(delays.products));

    hello.or(user).unify().or(products).unify().boxed()
}

/// Files under `dir`, with `index.html` for every other GET.
pub fn static_assets(dir: &Path) -> BoxedFilter<(Response,)> {
    let files = warp::get().and(warp::fs::dir(dir.to_path_buf()));
    let index = warp::get().and(warp::fs::file(dir.join("index.html")));
    files
        .or(index)
        .unify()
        .map(|file: warp::fs::File| file.into_response())
        .boxed()
}

async fn serve_greeting(delay: Duration) -> Result<Response, Rejection> {
    tokio::time::sleep(delay).await;
    debug!(?delay, "Serving greeting");
    Ok(warp::reply::json(&Greeting::live()).into_response())
}

async fn serve_profile(delay: Duration) -> Result<Response, Rejection> {
    tokio::time::sleep(delay).await;
    debug!(?delay, "Serving profile");
    Ok(warp::reply::json(&Profile::fallback()).into_response())
}

async fn serve_catalog(delay: Duration) -> Result<Response, Rejection> {
    tokio::time::sleep(delay).await;
    debug!(?delay, "Serving catalog");
    Ok(warp::reply::json(&Catalog::fallback()).into_response())
}
