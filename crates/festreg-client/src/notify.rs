//! User-feedback hooks for the retry loop.
//!
//! The retry machinery reports progress through this trait instead of
//! talking to any particular toast/notification UI. Implementations decide
//! how "still connecting" and "gave up" get presented; the default
//! [`NoopNotifier`] presents nothing, which keeps the client usable from
//! non-interactive contexts and tests.

/// Observer for a logical request's retry lifecycle.
///
/// Contract:
/// - `on_retry_start` fires at most once per logical request, when the
///   first retry begins. `attempt` is the retry ordinal (1-based).
/// - `on_retry_end` fires exactly once after `on_retry_start` fired, on
///   either final success or final failure — implementations dismiss the
///   persistent "connecting" indicator here.
/// - `on_final_failure` fires once when the request terminally fails with
///   a connectivity-class or server-error failure, carrying a
///   human-readable message distinct from the raw transport error. 4xx
///   outcomes never reach this hook; callers surface those themselves.
pub trait RetryNotifier: Send + Sync {
    fn on_retry_start(&self, attempt: u32) {
        let _ = attempt;
    }

    fn on_retry_end(&self) {}

    fn on_final_failure(&self, message: &str) {
        let _ = message;
    }
}

/// Notifier that presents nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl RetryNotifier for NoopNotifier {}
