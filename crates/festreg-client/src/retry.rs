//! Bounded retry with linear backoff for backend HTTP calls.
//!
//! Retries transient failures only: transport errors where no response
//! arrived at all (connection refused, timeout, DNS) and server errors
//! (status >= 500). Everything else — 4xx responses, application error
//! bodies — is terminal on the first attempt and surfaced immediately.
//!
//! Retries for one logical request are strictly sequential; the caller sees
//! nothing but elapsed time plus whatever its [`RetryNotifier`] presents.

use std::time::Duration;

use crate::notify::RetryNotifier;

/// Retries after the initial attempt.
pub(crate) const MAX_RETRIES: u32 = 3;

/// Base delay between retries. Linear backoff: the wait before retry `n`
/// is `RETRY_DELAY_MS * n` (3 s, 6 s, 9 s).
pub(crate) const RETRY_DELAY_MS: u64 = 3000;

/// User-facing message attached when every attempt died without a response.
pub(crate) const CONNECTION_FAILED_MESSAGE: &str =
    "Unable to connect. Please check your internet connection or try a different network.";

/// User-facing message when the backend kept answering with server errors.
pub(crate) const SERVER_UNAVAILABLE_MESSAGE: &str =
    "The server is having trouble right now. Please try again in a moment.";

/// Retry behavior for transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt (so `max_retries + 1` sends worst
    /// case).
    pub max_retries: u32,
    /// Base backoff delay; the wait before retry `n` is `base_delay * n`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay before retry `n` (1-based).
    pub fn delay_before_retry(&self, n: u32) -> Duration {
        self.base_delay * n
    }
}

/// Whether a completed response should be retried.
fn is_retryable_response(resp: &reqwest::Response) -> bool {
    resp.status().is_server_error()
}

/// Send an HTTP request with bounded, linear-backoff retry.
///
/// The closure `f` rebuilds and sends the request; it is called up to
/// `policy.max_retries + 1` times. Retry progress is reported through
/// `notifier` per the [`RetryNotifier`] contract: one `on_retry_start` when
/// the first retry begins, one `on_retry_end` at the terminal outcome, and
/// one `on_final_failure` when the terminal outcome is a transport failure
/// or an exhausted run of server errors.
///
/// Returns the final transport outcome. A `5xx` response that survives all
/// retries is returned as `Ok` — the caller maps status codes to API
/// errors the same way it does for non-retryable statuses.
pub(crate) async fn send_with_retry<F, Fut>(
    policy: &RetryPolicy,
    notifier: &dyn RetryNotifier,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    let mut retries_used: u32 = 0;
    loop {
        let outcome = f().await;

        let retryable = match &outcome {
            Err(_) => true,
            Ok(resp) => is_retryable_response(resp),
        };

        if !retryable || retries_used >= policy.max_retries {
            if retries_used > 0 {
                notifier.on_retry_end();
            }
            match &outcome {
                Err(e) => {
                    tracing::warn!("request failed after {retries_used} retries: {e}");
                    notifier.on_final_failure(CONNECTION_FAILED_MESSAGE);
                }
                Ok(resp) if is_retryable_response(resp) => {
                    tracing::warn!(
                        status = resp.status().as_u16(),
                        "server error persisted after {retries_used} retries"
                    );
                    notifier.on_final_failure(SERVER_UNAVAILABLE_MESSAGE);
                }
                Ok(_) => {}
            }
            return outcome;
        }

        retries_used += 1;
        if retries_used == 1 {
            notifier.on_retry_start(retries_used);
        }

        let delay = policy.delay_before_retry(retries_used);
        match &outcome {
            Err(e) => tracing::warn!(
                retry = retries_used,
                max_retries = policy.max_retries,
                "request failed, retrying in {delay:?}: {e}"
            ),
            Ok(resp) => tracing::warn!(
                retry = retries_used,
                max_retries = policy.max_retries,
                status = resp.status().as_u16(),
                "server error, retrying in {delay:?}"
            ),
        }
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoopNotifier;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn default_backoff_schedule_is_linear() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.delay_before_retry(1), Duration::from_secs(3));
        assert_eq!(policy.delay_before_retry(2), Duration::from_secs(6));
        assert_eq!(policy.delay_before_retry(3), Duration::from_secs(9));
    }

    #[tokio::test]
    async fn retry_exhausts_all_attempts_on_transport_failure() {
        let call_count = Arc::new(AtomicU32::new(0));
        let cc = call_count.clone();
        let policy = RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(1),
        };

        let result = send_with_retry(&policy, &NoopNotifier, || {
            let cc = cc.clone();
            async move {
                cc.fetch_add(1, Ordering::SeqCst);
                // Request to a guaranteed-closed port: connection refused.
                reqwest::Client::builder()
                    .timeout(Duration::from_millis(50))
                    .build()
                    .unwrap()
                    .get("http://127.0.0.1:1/")
                    .send()
                    .await
            }
        })
        .await;

        assert!(result.is_err(), "request to closed port must fail");
        assert_eq!(
            call_count.load(Ordering::SeqCst),
            policy.max_retries + 1,
            "should exhaust all retry attempts"
        );
    }
}
