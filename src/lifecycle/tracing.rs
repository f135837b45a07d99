//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for both binaries.
//!
//! ## What Gets Traced
//!
//! - **Provider**: every HTTP request (via `warp::trace::request()`) and each
//!   endpoint's artificial delay at `debug`
//! - **Controller**: session start, the environment check, each load outcome, and
//!   the first failure that degrades the session (`warn`)
//! - **Clients**: one span per `load` request
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run                   # provider, compact
//! RUST_LOG=debug cargo run --bin tabs       # walkthrough with delays and cache hits
//! RUST_LOG=tabbed_demo::controller=debug cargo run --bin tabs
//! ```
//!
//! With `RUST_LOG=info` a walkthrough against an absent provider reads:
//!
//! ```text
//! INFO Controller started host=localhost
//! WARN load: Fetch failed, switching session to fallback data kind=greeting error=Transport failure: ...
//! INFO Provider check finished outcome=FallenBack available=false
//! INFO load: Fallback assigned kind=profile
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
