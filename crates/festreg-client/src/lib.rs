//! # festreg-client — Typed Rust client for the festreg backend
//!
//! Ergonomic, typed access to the festival REST API:
//! - **Events** via `/api/events`
//! - **Registrations** via `/api/registrations`
//! - **Notifications** via `/api/notifications`
//!
//! ## Resilience
//!
//! The backend runs on free-tier hosting that cold starts after idling, so
//! every call goes through bounded retry with linear backoff (transport
//! failures and 5xx only — 4xx outcomes are terminal immediately). Retry
//! progress is reported through an injectable [`RetryNotifier`] so a UI can
//! show "still connecting" feedback without the resilience logic knowing
//! about any toast library. Callers never see an intermediate failure: a
//! call resolves to a success payload or to a final [`FestApiError`]
//! carrying both the original failure detail and a user-readable summary.
//!
//! ## Sessions
//!
//! Authentication rides on an explicit [`Session`] injected at
//! construction. Every request attaches `Authorization: Bearer <token>`
//! when the session holds one; a missing token is not an error at this
//! layer.

pub mod config;
pub mod error;
pub mod events;
pub mod notifications;
pub mod notify;
pub mod registrations;
pub(crate) mod retry;
pub mod session;
pub(crate) mod transport;

pub use config::FestApiConfig;
pub use error::FestApiError;
pub use notify::{NoopNotifier, RetryNotifier};
pub use retry::RetryPolicy;
pub use session::Session;

use std::sync::Arc;
use std::time::Duration;

use transport::Transport;

/// Top-level festreg API client. Holds sub-clients for each resource.
#[derive(Debug, Clone)]
pub struct FestClient {
    config: FestApiConfig,
    events: events::EventClient,
    registrations: registrations::RegistrationClient,
    notifications: notifications::NotificationClient,
    session: Arc<Session>,
}

impl FestClient {
    /// Create a client with an anonymous session and no retry feedback.
    pub fn new(config: FestApiConfig) -> Result<Self, FestApiError> {
        Self::with_parts(config, Arc::new(Session::anonymous()), Arc::new(NoopNotifier))
    }

    /// Create a client with an explicit session and retry notifier.
    pub fn with_parts(
        config: FestApiConfig,
        session: Arc<Session>,
        notifier: Arc<dyn RetryNotifier>,
    ) -> Result<Self, FestApiError> {
        let api_root = config.api_root()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FestApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let transport = Transport::new(http, api_root, session.clone(), notifier, config.retry);

        Ok(Self {
            events: events::EventClient::new(transport.clone()),
            registrations: registrations::RegistrationClient::new(transport.clone()),
            notifications: notifications::NotificationClient::new(transport),
            session,
            config,
        })
    }

    /// Access the events client.
    pub fn events(&self) -> &events::EventClient {
        &self.events
    }

    /// Access the registrations client.
    pub fn registrations(&self) -> &registrations::RegistrationClient {
        &self.registrations
    }

    /// Access the notifications client.
    pub fn notifications(&self) -> &notifications::NotificationClient {
        &self.notifications
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Best-effort wake-up probe for a cold-started backend.
    ///
    /// Fires one unauthenticated `GET /api/health` with a short timeout and
    /// no retry. Never fails and never blocks later requests: a dead probe
    /// is logged at debug level and reported as `false`, nothing more. Call
    /// it once at application start, ignore the result if you like.
    pub async fn wake_up(&self) -> bool {
        let url = match self.config.api_root() {
            Ok(root) => format!("{root}health"),
            Err(_) => return false,
        };
        let probe = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.config.probe_timeout_secs))
            .build();
        let probe = match probe {
            Ok(client) => client,
            Err(_) => return false,
        };
        match probe.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::debug!("backend responded to wake-up probe");
                true
            }
            Ok(resp) => {
                tracing::debug!(
                    status = resp.status().as_u16(),
                    "wake-up probe answered with non-success; real requests will retry"
                );
                false
            }
            Err(e) => {
                tracing::debug!("wake-up probe failed ({e}); real requests will retry");
                false
            }
        }
    }
}
