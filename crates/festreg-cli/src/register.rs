//! # Register Subcommand
//!
//! Submit a registration: local validation first (team size, member
//! completeness, submission gate), then the network call. Validation
//! failures never reach the backend.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use festreg_client::FestClient;
use festreg_core::{EventKind, RegistrationAttempt, SubmissionGate, TeamMember, TeamRoster};

/// Arguments for the `festreg register` subcommand.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Event identifier to register for.
    pub event: String,

    /// JSON file holding the team member list (array of member records).
    /// Required for team events, ignored for individual events.
    #[arg(long)]
    pub members: Option<PathBuf>,
}

pub async fn run_register(args: &RegisterArgs, client: &FestClient) -> Result<()> {
    let id = args.event.parse()?;
    let Some(event) = client.events().get(&id).await? else {
        bail!("event not found: {id}");
    };

    match event.submission_gate() {
        SubmissionGate::Closed => {
            bail!("registration for this event is closed, contact the event coordinator")
        }
        SubmissionGate::Full => bail!("event is full"),
        SubmissionGate::Open => {}
    }

    let roster = match (event.kind, &args.members) {
        (EventKind::Team, Some(path)) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let members: Vec<TeamMember> =
                serde_json::from_str(&raw).context("invalid team member file")?;
            TeamRoster::from_members(members)
        }
        (EventKind::Team, None) => bail!(
            "{} is a team event ({} - {} members); pass --members <file.json>",
            event.name,
            event.team_bounds.min(),
            event.team_bounds.max()
        ),
        (EventKind::Individual, _) => TeamRoster::new(),
    };

    // Local checks; surfaced inline, no round-trip.
    let attempt = RegistrationAttempt::for_event(&event, &roster)?;

    let record = client.registrations().register(&attempt).await.map_err(|e| {
        // Surface the backend's own message (already-registered, capacity
        // race, per-fest cap) rather than the transport wording.
        anyhow::anyhow!("{}", e.user_message())
    })?;

    println!("Registered for {} ({})", record.event_name, record.event_id);
    if let Some(members) = &record.team_members {
        println!("Team of {}:", members.len());
        for member in members {
            println!("  - {} <{}>", member.full_name, member.email);
        }
    }
    Ok(())
}
