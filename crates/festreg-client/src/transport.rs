//! Shared request plumbing for the endpoint sub-clients.

use std::sync::Arc;

use url::Url;

use crate::error::FestApiError;
use crate::notify::RetryNotifier;
use crate::retry::{send_with_retry, RetryPolicy};
use crate::session::Session;

/// Everything a sub-client needs to issue a call: the pooled HTTP client,
/// the API root, the session whose bearer token rides on each request, the
/// retry policy, and the notifier retries report through.
#[derive(Clone)]
pub(crate) struct Transport {
    pub(crate) http: reqwest::Client,
    api_root: Url,
    session: Arc<Session>,
    notifier: Arc<dyn RetryNotifier>,
    retry: RetryPolicy,
}

impl Transport {
    pub(crate) fn new(
        http: reqwest::Client,
        api_root: Url,
        session: Arc<Session>,
        notifier: Arc<dyn RetryNotifier>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            http,
            api_root,
            session,
            notifier,
            retry,
        }
    }

    /// Absolute URL for a path relative to the API root.
    pub(crate) fn url(&self, path: &str) -> String {
        // api_root always ends with a slash.
        format!("{}{}", self.api_root, path)
    }

    /// Attach the session's bearer token, when one is held. A missing token
    /// is not an error here; the backend answers 401 if auth was required.
    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send a request through the retry loop. The closure rebuilds the
    /// request for each attempt; authorization is applied per attempt so a
    /// token set mid-flight is picked up by the next retry.
    pub(crate) async fn send<F>(
        &self,
        endpoint: &str,
        build: F,
    ) -> Result<reqwest::Response, FestApiError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        send_with_retry(&self.retry, self.notifier.as_ref(), || {
            self.authorize(build()).send()
        })
        .await
        .map_err(|e| FestApiError::Http {
            endpoint: endpoint.to_string(),
            source: e,
        })
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("api_root", &self.api_root)
            .field("session", &self.session)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
