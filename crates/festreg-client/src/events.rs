//! Typed client for the events endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/events` | List active events |
//! | GET    | `/api/events/{id}` | Get one event |
//! | POST   | `/api/events` | Create event (admin) |
//! | PUT    | `/api/events/{id}` | Partial update (admin) |
//! | DELETE | `/api/events/{id}` | Disable event (admin, soft delete) |

use chrono::{DateTime, Utc};
use serde::Serialize;

use festreg_core::{Event, EventId};

use crate::error::FestApiError;
use crate::transport::Transport;

/// Request to create an event (admin).
#[derive(Debug, Clone, Serialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub sub_fest: festreg_core::SubFest,
    pub event_type: festreg_core::EventKind,
    pub coordinators: Vec<String>,
    pub timing: String,
    pub venue: String,
    pub registration_deadline: DateTime<Utc>,
    pub capacity: u32,
    pub min_team_size: u32,
    pub max_team_size: u32,
    pub max_events_per_student: u32,
}

/// Partial update for `PUT /api/events/{id}` (admin). Only the fields that
/// are `Some` are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_registration_open: Option<bool>,
}

/// Client for the events endpoints.
#[derive(Debug, Clone)]
pub struct EventClient {
    transport: Transport,
}

impl EventClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List events. Calls `GET /api/events`.
    pub async fn list(&self) -> Result<Vec<Event>, FestApiError> {
        let endpoint = "GET /events";
        let url = self.transport.url("events");

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

    /// Get one event by id. Calls `GET /api/events/{id}`; a 404 maps to
    /// `None`.
    pub async fn get(&self, id: &EventId) -> Result<Option<Event>, FestApiError> {
        let endpoint = format!("GET /events/{id}");
        let url = self.transport.url(&format!("events/{id}"));

        let resp = self
            .transport
            .send(&endpoint, || self.transport.http.get(&url))
            .await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            return Err(FestApiError::from_response(&endpoint, resp).await);
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| FestApiError::Deserialization {
                endpoint,
                source: e,
            })
    }

    /// Create an event (admin). Calls `POST /api/events`.
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event, FestApiError> {
        let endpoint = "POST /events";
        let url = self.transport.url("events");

        let resp = self
            .transport
            .send(endpoint, || self.transport.http.post(&url).json(req))
            .await?;

        if !resp.status().is_success() {
            return Err(FestApiError::from_response(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| FestApiError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Apply a partial update (admin). Calls `PUT /api/events/{id}`.
    pub async fn update(&self, id: &EventId, update: &EventUpdate) -> Result<Event, FestApiError> {
        let endpoint = format!("PUT /events/{id}");
        let url = self.transport.url(&format!("events/{id}"));

        let resp = self
            .transport
            .send(&endpoint, || self.transport.http.put(&url).json(update))
            .await?;

        if !resp.status().is_success() {
            return Err(FestApiError::from_response(&endpoint, resp).await);
        }

        resp.json().await.map_err(|e| FestApiError::Deserialization {
            endpoint,
            source: e,
        })
    }

    /// Flip the registration-open flag (admin).
    ///
    /// Toggles the flag and nothing else: the deadline is a separate
    /// concern, changed only through [`EventClient::extend_deadline`].
    pub async fn set_registration_open(
        &self,
        id: &EventId,
        open: bool,
    ) -> Result<Event, FestApiError> {
        self.update(
            id,
            &EventUpdate {
                is_registration_open: Some(open),
                ..EventUpdate::default()
            },
        )
        .await
    }

    /// Move the registration deadline (admin). Explicit — never implied by
    /// opening registration.
    pub async fn extend_deadline(
        &self,
        id: &EventId,
        new_deadline: DateTime<Utc>,
    ) -> Result<Event, FestApiError> {
        self.update(
            id,
            &EventUpdate {
                registration_deadline: Some(new_deadline),
                ..EventUpdate::default()
            },
        )
        .await
    }

    /// Disable an event (admin, soft delete). Calls `DELETE /api/events/{id}`.
    pub async fn disable(&self, id: &EventId) -> Result<(), FestApiError> {
        let endpoint = format!("DELETE /events/{id}");
        let url = self.transport.url(&format!("events/{id}"));

        let resp = self
            .transport
            .send(&endpoint, || self.transport.http.delete(&url))
            .await?;

        if !resp.status().is_success() {
            return Err(FestApiError::from_response(&endpoint, resp).await);
        }

        Ok(())
    }
}
