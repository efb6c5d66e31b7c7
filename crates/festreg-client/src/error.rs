//! Festival API client error types.

/// Errors from festreg backend calls.
///
/// Callers receive one of these only after the retry machinery has made its
/// final decision — a `Http` or 5xx `Api` error here means retries were
/// already exhausted.
#[derive(Debug, thiserror::Error)]
pub enum FestApiError {
    /// No response was received (connection refused, timeout, DNS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The backend answered with a non-2xx status.
    #[error("backend {endpoint} returned {status}: {}", .detail.as_deref().unwrap_or(.body.as_str()))]
    Api {
        endpoint: String,
        status: u16,
        /// The backend's `detail` message, when the error body carried one.
        /// Shown to the user verbatim.
        detail: Option<String>,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Wire shape of a backend error body.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

impl FestApiError {
    /// Build an `Api` error from a non-success response, extracting the
    /// backend's `detail` message when the body carries one.
    pub(crate) async fn from_response(endpoint: &str, resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|b| b.detail);
        FestApiError::Api {
            endpoint: endpoint.to_string(),
            status,
            detail,
            body,
        }
    }

    /// A message suitable for showing to the user, distinct from the raw
    /// transport detail. Backend-provided `detail` messages pass through
    /// verbatim; everything else falls back to a generic summary.
    pub fn user_message(&self) -> String {
        match self {
            FestApiError::Http { .. } => crate::retry::CONNECTION_FAILED_MESSAGE.to_string(),
            FestApiError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            FestApiError::Api { status, .. } if *status >= 500 => {
                crate::retry::SERVER_UNAVAILABLE_MESSAGE.to_string()
            }
            FestApiError::Api { .. } => "Request failed. Please try again.".to_string(),
            FestApiError::Deserialization { .. } | FestApiError::Config(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }

    /// The HTTP status, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FestApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
