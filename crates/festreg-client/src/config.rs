//! Festival API client configuration.
//!
//! A single external value configures the client: the backend base URL,
//! taken from the environment and joined with `/api`. Timeouts default to
//! generous values because the backend runs on free-tier hosting that cold
//! starts after idling.

use std::time::Duration;

use url::Url;

use crate::retry::RetryPolicy;

/// Default request timeout. Generous on purpose: slow mobile networks plus
/// a cold-starting backend can stretch a first response well past normal.
const DEFAULT_TIMEOUT_SECS: u64 = 90;

/// Timeout for the one-shot wake-up probe. Short — the probe is best-effort
/// and must never hold up application start.
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the festreg backend.
#[derive(Debug, Clone)]
pub struct FestApiConfig {
    /// Backend base URL (without the `/api` suffix).
    /// Default: `http://localhost:8000`
    pub base_url: Url,
    /// Per-attempt request timeout in seconds.
    pub timeout_secs: u64,
    /// Wake-up probe timeout in seconds.
    pub probe_timeout_secs: u64,
    /// Retry behavior for transient failures.
    pub retry: RetryPolicy,
}

impl FestApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FESTREG_BACKEND_URL` (default: `http://localhost:8000`)
    /// - `FESTREG_TIMEOUT_SECS` (default: 90)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("FESTREG_BACKEND_URL", "http://localhost:8000")?,
            timeout_secs: std::env::var("FESTREG_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            retry: RetryPolicy::default(),
        })
    }

    /// Configuration pointing at an explicit base URL with default timeouts
    /// and retry behavior.
    pub fn for_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            retry: RetryPolicy::default(),
        }
    }

    /// Configuration for tests against a local mock server: short timeouts
    /// and millisecond backoff so retry paths run fast.
    pub fn local_mock(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 5,
            probe_timeout_secs: 1,
            retry: RetryPolicy {
                base_delay: Duration::from_millis(10),
                ..RetryPolicy::default()
            },
        }
    }

    /// The API root: base URL joined with `/api`.
    pub(crate) fn api_root(&self) -> Result<Url, ConfigError> {
        // Url::join treats a missing trailing slash as a file segment, so
        // normalize before appending.
        let mut base = self.base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&format!("{base}api/"))
            .map_err(|e| ConfigError::InvalidUrl("base_url".to_string(), e.to_string()))
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
