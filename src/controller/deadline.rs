//! Deadline-bounded fetches.
use crate::clients::{DataProvider, FetchError};
use crate::controller::Resource;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tokio_util::sync::CancellationToken;

/// Fetches and decodes `T`, giving up at `bound` from now or when `cancel` fires.
///
/// Expiry and cancellation drop the in-flight request and come back as ordinary
/// errors, never as panics.
pub async fn fetch_within<T: Resource>(
    provider: &dyn DataProvider,
    bound: Duration,
    cancel: &CancellationToken,
) -> Result<T, FetchError> {
    let deadline = Instant::now() + bound;
    let body = tokio::select! {
        _ = cancel.cancelled() => {
            return Err(FetchError::Transport("Request cancelled".to_string()));
        }
        result = timeout_at(deadline, provider.fetch(T::KIND)) => {
            result.map_err(|_| FetchError::Timeout(bound))??
        }
    };
    Ok(serde_json::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::mock::MockProvider;
    use crate::model::{Greeting, Profile, ResourceKind};

    #[tokio::test(start_paused = true)]
    async fn test_slow_provider_times_out_at_deadline() {
        let mock = MockProvider::new();
        mock.expect_fetch(ResourceKind::Profile)
            .after(Duration::from_secs(5))
            .return_ok(Profile::fallback());

        let started = Instant::now();
        let result = fetch_within::<Profile>(
            &mock,
            Duration::from_millis(3000),
            &CancellationToken::new(),
        )
        .await;

        assert_eq!(result, Err(FetchError::Timeout(Duration::from_millis(3000))));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(3000) && elapsed < Duration::from_millis(3005));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_transport_failure() {
        let mock = MockProvider::new();
        mock.expect_fetch(ResourceKind::Greeting).return_ok(serde_json::json!({ "msg": 42 }));

        let result = fetch_within::<Greeting>(
            &mock,
            Duration::from_secs(3),
            &CancellationToken::new(),
        )
        .await;

        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_aborts_in_flight_request() {
        let mock = MockProvider::new();
        mock.expect_fetch(ResourceKind::Greeting)
            .after(Duration::from_secs(2))
            .return_ok(Greeting::live());

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result =
            fetch_within::<Greeting>(&mock, Duration::from_secs(3), &cancel).await;
        assert_eq!(
            result,
            Err(FetchError::Transport("Request cancelled".to_string()))
        );
    }
}
