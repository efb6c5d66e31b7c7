//! Typed client for the notification endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FestApiError;
use crate::transport::Transport;

/// A festival-wide announcement.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to publish a notification (admin).
#[derive(Debug, Clone, Serialize)]
pub struct CreateNotificationRequest {
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Client for the notification endpoints.
#[derive(Debug, Clone)]
pub struct NotificationClient {
    transport: Transport,
}

impl NotificationClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// List notifications, newest first. Calls `GET /api/notifications`.
    pub async fn list(&self) -> Result<Vec<Notification>, FestApiError> {
        let endpoint = "GET /notifications";
        let url = self.transport.url("notifications");

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

    /// Publish a notification (admin). Calls `POST /api/notifications`.
    pub async fn create(
        &self,
        req: &CreateNotificationRequest,
    ) -> Result<Notification, FestApiError> {
        let endpoint = "POST /notifications";
        let url = self.transport.url("notifications");

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
}
