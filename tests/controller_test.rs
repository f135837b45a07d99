//! View controller scenarios against a mocked provider.
//!
//! Time is paused in every test, so the 1s/3s delays and deadlines cost nothing
//! and elapsed times are deterministic.

use std::time::Duration;
use tabbed_demo::clients::FetchError;
use tabbed_demo::config::ControllerSettings;
use tabbed_demo::controller::mock::MockProvider;
use tabbed_demo::controller::{HostEnvironment, LoadOutcome, LoadState};
use tabbed_demo::lifecycle::ViewSession;
use tabbed_demo::model::{Catalog, Greeting, Product, ProductId, Profile, ResourceKind};
use tabbed_demo::view::Tab;
use tokio::time::Instant;

fn localhost() -> HostEnvironment {
    HostEnvironment::new("localhost:5173")
}

/// Paused time advances in whole timer ticks; allow one tick of slack.
fn assert_elapsed(started: Instant, expected: Duration) {
    let elapsed = started.elapsed();
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(5),
        "expected ~{:?}, got {:?}",
        expected,
        elapsed
    );
}

fn start(mock: &MockProvider, host: HostEnvironment) -> ViewSession {
    ViewSession::start(mock.provider(), ControllerSettings::default(), host)
}

#[tokio::test(start_paused = true)]
async fn test_greeting_loads_live_message_at_start() {
    let mock = MockProvider::new();
    mock.expect_fetch(ResourceKind::Greeting)
        .after(Duration::from_millis(1000))
        .return_ok(Greeting::live());

    let session = start(&mock, localhost());
    let state = session.client.snapshot().await.unwrap();

    assert_eq!(
        state.greeting(),
        &LoadState::Loaded(Greeting::new("Hello from Express server!"))
    );
    assert!(state.is_available());
    mock.verify();
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_each_resource_is_fetched_once() {
    let mock = MockProvider::new();
    mock.expect_fetch(ResourceKind::Greeting).return_ok(Greeting::live());
    mock.expect_fetch(ResourceKind::Profile)
        .after(Duration::from_millis(2000))
        .return_ok(Profile::fallback());
    mock.expect_fetch(ResourceKind::Catalog)
        .after(Duration::from_millis(2500))
        .return_ok(Catalog::fallback());

    let session = start(&mock, localhost());
    let client = &session.client;

    assert_eq!(client.load(ResourceKind::Greeting).await, Ok(LoadOutcome::Cached));
    for kind in [ResourceKind::Profile, ResourceKind::Catalog] {
        assert_eq!(client.load(kind).await, Ok(LoadOutcome::Loaded));

        let started = Instant::now();
        assert_eq!(client.load(kind).await, Ok(LoadOutcome::Cached));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    assert_eq!(
        mock.calls(),
        vec![ResourceKind::Greeting, ResourceKind::Profile, ResourceKind::Catalog]
    );
    assert!(client.snapshot().await.unwrap().is_available());
    mock.verify();
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_profile_timeout_degrades_session() {
    let mock = MockProvider::new();
    mock.expect_fetch(ResourceKind::Greeting).return_ok(Greeting::live());
    mock.expect_fetch(ResourceKind::Profile)
        .after(Duration::from_secs(10))
        .return_ok(Profile::fallback());

    let session = start(&mock, localhost());
    let client = &session.client;

    let started = Instant::now();
    assert_eq!(client.activate(Tab::User).await, Ok(LoadOutcome::FallenBack));
    assert_elapsed(started, Duration::from_millis(3000));

    let profile = client.value::<Profile>().await.unwrap().unwrap();
    assert_eq!(profile.name, "John Doe");
    assert_eq!(profile.experience, 5);
    assert_eq!(profile.skills, vec!["JavaScript", "React", "Node.js", "Express"]);

    let state = client.snapshot().await.unwrap();
    assert!(!state.is_available());
    assert!(state.profile().is_fallback());
    // The greeting loaded before the failure stays live.
    assert!(matches!(state.greeting(), LoadState::Loaded(_)));

    // Products now skip the network and wait out the simulated delay.
    let started = Instant::now();
    assert_eq!(client.activate(Tab::Products).await, Ok(LoadOutcome::FallenBack));
    assert_elapsed(started, Duration::from_millis(1000));

    let catalog = client.value::<Catalog>().await.unwrap().unwrap();
    assert_eq!(catalog, Catalog::fallback());
    assert_eq!(catalog.len(), 6);
    assert_eq!(
        catalog.get(ProductId(3)),
        Some(&Product::new(3, "Smart Watch", 299.99, "Electronics", false))
    );

    assert_eq!(mock.calls(), vec![ResourceKind::Greeting, ResourceKind::Profile]);
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_slow_greeting_falls_back_at_its_deadline() {
    let mock = MockProvider::new();
    mock.expect_fetch(ResourceKind::Greeting)
        .after(Duration::from_secs(10))
        .return_ok(Greeting::live());

    let started = Instant::now();
    let session = start(&mock, localhost());
    let client = &session.client;

    let state = client.snapshot().await.unwrap();
    assert_elapsed(started, Duration::from_millis(3000));
    assert_eq!(state.greeting(), &LoadState::FallenBack(Greeting::fallback()));
    assert!(!state.is_available());
    assert_eq!(state.availability().reason(), Some("Request timed out after 3s"));

    let started = Instant::now();
    assert_eq!(client.load(ResourceKind::Profile).await, Ok(LoadOutcome::FallenBack));
    assert_elapsed(started, Duration::from_millis(1000));
    assert_eq!(client.value::<Profile>().await.unwrap(), Some(Profile::fallback()));

    assert_eq!(mock.calls(), vec![ResourceKind::Greeting]);
    mock.verify();
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_catalog_timeout_degrades_session() {
    let mock = MockProvider::new();
    mock.expect_fetch(ResourceKind::Greeting).return_ok(Greeting::live());
    mock.expect_fetch(ResourceKind::Catalog)
        .after(Duration::from_secs(10))
        .return_ok(Catalog::fallback());

    let session = start(&mock, localhost());
    let client = &session.client;

    let started = Instant::now();
    assert_eq!(client.activate(Tab::Products).await, Ok(LoadOutcome::FallenBack));
    assert_elapsed(started, Duration::from_millis(3000));

    let state = client.snapshot().await.unwrap();
    assert_eq!(state.catalog(), &LoadState::FallenBack(Catalog::fallback()));
    assert!(!state.is_available());
    assert_eq!(state.availability().reason(), Some("Request timed out after 3s"));
    assert!(matches!(state.greeting(), LoadState::Loaded(_)));

    let started = Instant::now();
    assert_eq!(client.activate(Tab::User).await, Ok(LoadOutcome::FallenBack));
    assert_elapsed(started, Duration::from_millis(1000));

    assert_eq!(mock.calls(), vec![ResourceKind::Greeting, ResourceKind::Catalog]);
    mock.verify();
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_unreachable_provider_at_start_degrades_everything() {
    let mock = MockProvider::new();
    mock.expect_fetch(ResourceKind::Greeting)
        .return_err(FetchError::Transport("connection refused".into()));

    let session = start(&mock, localhost());
    let client = &session.client;

    let state = client.snapshot().await.unwrap();
    assert_eq!(state.greeting(), &LoadState::FallenBack(Greeting::fallback()));
    assert!(!state.is_available());
    assert_eq!(
        state.availability().reason(),
        Some("Transport failure: connection refused")
    );

    assert_eq!(client.load(ResourceKind::Profile).await, Ok(LoadOutcome::FallenBack));
    assert_eq!(client.load(ResourceKind::Catalog).await, Ok(LoadOutcome::FallenBack));
    assert_eq!(client.load(ResourceKind::Catalog).await, Ok(LoadOutcome::Cached));

    assert_eq!(mock.calls(), vec![ResourceKind::Greeting]);
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_static_hosting_never_touches_the_network() {
    let mock = MockProvider::new();
    let started = Instant::now();

    let session = start(&mock, HostEnvironment::new("octocat.github.io"));
    let client = &session.client;

    let state = client.snapshot().await.unwrap();
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(state.greeting(), &LoadState::FallenBack(Greeting::fallback()));
    assert!(!state.is_available());

    for kind in [ResourceKind::Profile, ResourceKind::Catalog] {
        let started = Instant::now();
        assert_eq!(client.load(kind).await, Ok(LoadOutcome::FallenBack));
        assert_elapsed(started, Duration::from_millis(1000));
    }

    assert!(mock.calls().is_empty());
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_watchers_see_the_loading_flag() {
    let mock = MockProvider::new();
    mock.expect_fetch(ResourceKind::Greeting).return_ok(Greeting::live());
    mock.expect_fetch(ResourceKind::Catalog)
        .after(Duration::from_millis(2000))
        .return_ok(Catalog::fallback());

    let session = start(&mock, localhost());
    let mut watcher = session.client.watch();

    let client = session.client.clone();
    let load = tokio::spawn(async move { client.load(ResourceKind::Catalog).await });

    watcher
        .wait_for(|state| state.is_loading(ResourceKind::Catalog))
        .await
        .unwrap();
    watcher
        .wait_for(|state| state.is_settled(ResourceKind::Catalog))
        .await
        .unwrap();

    assert_eq!(load.await.unwrap(), Ok(LoadOutcome::Loaded));
    assert!(!watcher.borrow().is_loading(ResourceKind::Catalog));
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_in_flight_greeting() {
    let mock = MockProvider::new();
    mock.expect_fetch(ResourceKind::Greeting)
        .after(Duration::from_secs(60))
        .return_ok(Greeting::live());

    let session = start(&mock, localhost());
    let mut watcher = session.client.watch();
    watcher
        .wait_for(|state| state.is_loading(ResourceKind::Greeting))
        .await
        .unwrap();

    let started = Instant::now();
    session.shutdown().await.unwrap();
    assert!(started.elapsed() < Duration::from_millis(3000));
    assert_eq!(
        watcher.borrow().greeting(),
        &LoadState::FallenBack(Greeting::fallback())
    );
}
