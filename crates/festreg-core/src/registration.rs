//! Registration attempts: the validated payload handed to the API client.

use serde::Serialize;

use crate::error::ValidationError;
use crate::event::{Event, EventId, EventKind};
use crate::member::TeamMember;
use crate::roster::TeamRoster;

/// A registration submission that has already passed local validation.
///
/// Constructed only through [`RegistrationAttempt::for_event`], so holding
/// one means the team composition rules were satisfied at build time. The
/// attempt lives only transiently — until submission succeeds or fails —
/// and carries no authority over the gate: callers still consult
/// [`Event::submission_gate`] before sending.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationAttempt {
    pub event_id: EventId,
    /// `None` for individual events; the complete members, in form order,
    /// for team events.
    pub team_members: Option<Vec<TeamMember>>,
}

impl RegistrationAttempt {
    /// Validate a roster against an event and build the submission payload.
    ///
    /// For individual events the roster is ignored and no member list is
    /// attached. For team events the roster must hold between
    /// `min_team_size` and `max_team_size` complete members (no duplicate
    /// emails); only the complete members are carried — blank or
    /// partially-filled rows are dropped.
    pub fn for_event(event: &Event, roster: &TeamRoster) -> Result<Self, ValidationError> {
        match event.kind {
            EventKind::Individual => Ok(Self {
                event_id: event.id.clone(),
                team_members: None,
            }),
            EventKind::Team => {
                roster.validate(event.team_bounds)?;
                Ok(Self {
                    event_id: event.id.clone(),
                    team_members: Some(roster.complete_members()),
                })
            }
        }
    }
}
