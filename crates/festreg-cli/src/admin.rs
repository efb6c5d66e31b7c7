//! # Admin Subcommand
//!
//! Registration-window controls and the export feed. Opening registration
//! and moving the deadline are deliberately separate commands: flipping the
//! flag never rewrites the deadline behind the operator's back.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

use festreg_client::FestClient;

/// Arguments for the `festreg admin` subcommand.
#[derive(Args, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Open registration for an event (flag only; deadline untouched).
    Open {
        /// Event identifier.
        event: String,
    },
    /// Close registration for an event.
    Close {
        /// Event identifier.
        event: String,
    },
    /// Move an event's registration deadline.
    ExtendDeadline {
        /// Event identifier.
        event: String,

        /// New deadline, RFC 3339 (e.g. 2026-03-10T18:00:00Z).
        deadline: DateTime<Utc>,
    },
    /// Disable an event (soft delete; hides it from students).
    Disable {
        /// Event identifier.
        event: String,
    },
    /// Export every registration row as JSON.
    Export {
        /// Output file path.
        #[arg(long, short, default_value = "registrations.json")]
        output: PathBuf,
    },
}

pub async fn run_admin(args: &AdminArgs, client: &FestClient) -> Result<()> {
    match &args.command {
        AdminCommand::Open { event } => {
            let id = event.parse()?;
            let event = client.events().set_registration_open(&id, true).await?;
            println!(
                "Registration open for {} (deadline unchanged: {})",
                event.name, event.registration_deadline
            );
            Ok(())
        }
        AdminCommand::Close { event } => {
            let id = event.parse()?;
            let event = client.events().set_registration_open(&id, false).await?;
            println!("Registration closed for {}", event.name);
            Ok(())
        }
        AdminCommand::ExtendDeadline { event, deadline } => {
            let id = event.parse()?;
            let event = client.events().extend_deadline(&id, *deadline).await?;
            println!(
                "Deadline for {} moved to {}",
                event.name, event.registration_deadline
            );
            Ok(())
        }
        AdminCommand::Disable { event } => {
            let id = event.parse()?;
            client.events().disable(&id).await?;
            println!("Event {id} disabled");
            Ok(())
        }
        AdminCommand::Export { output } => {
            let rows = client.registrations().all().await?;
            let file = std::fs::File::create(output)
                .with_context(|| format!("failed to create {}", output.display()))?;
            serde_json::to_writer_pretty(file, &rows)?;
            println!("Wrote {} registrations to {}", rows.len(), output.display());
            Ok(())
        }
    }
}
