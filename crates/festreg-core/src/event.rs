//! Event records and submission gating.
//!
//! [`Event`] is the read model the validator works from. It deserializes
//! through a raw wire record so that malformed payloads — empty ids,
//! inverted team-size bounds — are rejected when they enter the process,
//! not when a submission is already underway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Opaque backend identifier for an event.
///
/// Non-empty by construction. Deserializes as a plain string, then routes
/// through [`EventId::new`] so invalid values are rejected at
/// deserialization time — not silently accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EventId(String);

impl EventId {
    /// Create an event identifier, rejecting empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "event id" });
        }
        Ok(Self(value))
    }

    /// Access the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EventId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Sub-festival category partitioning events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubFest {
    Cultural,
    Sports,
    Technology,
    /// Forward-compatible catch-all for categories the backend introduces
    /// after this client version is deployed.
    #[serde(other)]
    Unknown,
}

/// Whether an event is entered individually or as a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Individual,
    Team,
}

/// Inclusive team-size bounds. Invariant: `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamBounds {
    min: u32,
    max: u32,
}

impl TeamBounds {
    /// Create team-size bounds, rejecting `min < 1` and `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, ValidationError> {
        if min < 1 || min > max {
            return Err(ValidationError::InvalidTeamBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds for an individual entry (exactly one participant).
    pub fn solo() -> Self {
        Self { min: 1, max: 1 }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether `count` complete members satisfies these bounds.
    pub fn contains(&self, count: u32) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Raw wire shape of an event as the backend serves it.
///
/// Fields use `#[serde(default)]` for resilience against schema evolution.
/// The backend may send additional fields not modeled here —
/// `serde(deny_unknown_fields)` is intentionally NOT used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawEvent {
    id: EventId,
    name: String,
    #[serde(default)]
    description: String,
    sub_fest: SubFest,
    event_type: EventKind,
    #[serde(default)]
    coordinators: Vec<String>,
    #[serde(default)]
    timing: String,
    #[serde(default)]
    venue: String,
    registration_deadline: DateTime<Utc>,
    capacity: u32,
    #[serde(default)]
    registered_count: u32,
    #[serde(default = "default_one")]
    min_team_size: u32,
    #[serde(default = "default_one")]
    max_team_size: u32,
    #[serde(default = "default_max_events")]
    max_events_per_student: u32,
    #[serde(default = "default_true")]
    is_registration_open: bool,
    #[serde(default = "default_true")]
    is_active: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

fn default_one() -> u32 {
    1
}

fn default_max_events() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

/// An event as the registration flow sees it.
///
/// Read-only from the validator's perspective: fetched fresh per view, never
/// mutated locally. `registered_count` is advisory and may be briefly stale;
/// the backend re-checks capacity on submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawEvent", into = "RawEvent")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    pub sub_fest: SubFest,
    pub kind: EventKind,
    /// Only meaningful when `kind` is [`EventKind::Team`]; solo bounds
    /// otherwise.
    pub team_bounds: TeamBounds,
    pub coordinators: Vec<String>,
    pub timing: String,
    pub venue: String,
    /// Informational in the submission flow — [`Event::submission_gate`]
    /// consults `is_registration_open` only.
    pub registration_deadline: DateTime<Utc>,
    pub capacity: u32,
    pub registered_count: u32,
    /// Per-student cap within a sub-fest, enforced by the backend.
    pub max_events_per_student: u32,
    /// Explicit admin override; the sole authority on whether submission is
    /// permitted.
    pub is_registration_open: bool,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawEvent> for Event {
    type Error = ValidationError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "event name" });
        }
        let team_bounds = match raw.event_type {
            EventKind::Individual => TeamBounds::solo(),
            EventKind::Team => TeamBounds::new(raw.min_team_size, raw.max_team_size)?,
        };
        Ok(Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            sub_fest: raw.sub_fest,
            kind: raw.event_type,
            team_bounds,
            coordinators: raw.coordinators,
            timing: raw.timing,
            venue: raw.venue,
            registration_deadline: raw.registration_deadline,
            capacity: raw.capacity,
            registered_count: raw.registered_count,
            max_events_per_student: raw.max_events_per_student,
            is_registration_open: raw.is_registration_open,
            is_active: raw.is_active,
            created_at: raw.created_at,
        })
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            sub_fest: event.sub_fest,
            event_type: event.kind,
            coordinators: event.coordinators,
            timing: event.timing,
            venue: event.venue,
            registration_deadline: event.registration_deadline,
            capacity: event.capacity,
            registered_count: event.registered_count,
            min_team_size: event.team_bounds.min(),
            max_team_size: event.team_bounds.max(),
            max_events_per_student: event.max_events_per_student,
            is_registration_open: event.is_registration_open,
            is_active: event.is_active,
            created_at: event.created_at,
        }
    }
}

/// Decision value for the registration call-to-action.
///
/// `Closed` takes precedence over `Full`: an admin-closed event reads as
/// closed even when capacity also happens to be exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionGate {
    /// Registration may be submitted.
    Open,
    /// Admin has closed registration; deadline and capacity are irrelevant.
    Closed,
    /// Capacity reached (`registered_count >= capacity`).
    Full,
}

impl SubmissionGate {
    pub fn allowed(&self) -> bool {
        matches!(self, SubmissionGate::Open)
    }
}

impl Event {
    /// Decide whether a registration attempt may be submitted right now.
    ///
    /// Pure function of already-fetched event data: the explicit
    /// `is_registration_open` flag is checked first, then capacity. The
    /// deadline is never consulted here — it is display-only in this flow.
    pub fn submission_gate(&self) -> SubmissionGate {
        if !self.is_registration_open {
            return SubmissionGate::Closed;
        }
        if self.registered_count >= self.capacity {
            return SubmissionGate::Full;
        }
        SubmissionGate::Open
    }
}
