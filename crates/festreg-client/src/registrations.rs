//! Typed client for the registration endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/api/registrations` | Submit a registration |
//! | GET    | `/api/registrations/my` | Current student's registrations |
//! | GET    | `/api/registrations` | All registrations (admin export feed) |

use chrono::{DateTime, Utc};
use serde::Deserialize;

use festreg_core::{EventId, RegistrationAttempt, SubFest, TeamMember};

use crate::error::FestApiError;
use crate::transport::Transport;

/// An accepted registration as the backend records it.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRecord {
    pub id: String,
    pub event_id: EventId,
    pub student_email: String,
    #[serde(default)]
    pub team_members: Option<Vec<TeamMember>>,
    pub registered_at: DateTime<Utc>,
    pub event_name: String,
    pub sub_fest: SubFest,
}

/// Client for the registration endpoints.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    transport: Transport,
}

impl RegistrationClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Submit a validated registration attempt. Calls
    /// `POST /api/registrations`.
    ///
    /// The attempt has already passed local validation (team size,
    /// completeness); the backend still re-checks capacity, deadline,
    /// duplicate registration, and the per-student cap, answering 400 with
    /// a `detail` message on violation — surfaced verbatim through
    /// [`FestApiError::user_message`], never retried.
    pub async fn register(
        &self,
        attempt: &RegistrationAttempt,
    ) -> Result<RegistrationRecord, FestApiError> {
        let endpoint = "POST /registrations";
        let url = self.transport.url("registrations");

        let resp = self
            .transport
            .send(endpoint, || self.transport.http.post(&url).json(attempt))
            .await?;

        if !resp.status().is_success() {
            return Err(FestApiError::from_response(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| FestApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// The authenticated student's registrations. Calls
    /// `GET /api/registrations/my`.
    pub async fn mine(&self) -> Result<Vec<RegistrationRecord>, FestApiError> {
        let endpoint = "GET /registrations/my";
        let url = self.transport.url("registrations/my");

        let resp = self
            .transport
            .send(endpoint, || self.transport.http.get(&url))
            .await?;

        if !resp.status().is_success() {
            return Err(FestApiError::from_response(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| FestApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Every registration row (admin). Calls `GET /api/registrations`.
    ///
    /// Returned as raw JSON rows: this feed backs data export, and the
    /// backend reserves the right to add columns.
    pub async fn all(&self) -> Result<Vec<serde_json::Value>, FestApiError> {
        let endpoint = "GET /registrations";
        let url = self.transport.url("registrations");

        let resp = self
            .transport
            .send(endpoint, || self.transport.http.get(&url))
            .await?;

        if !resp.status().is_success() {
            return Err(FestApiError::from_response(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| FestApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }
}
