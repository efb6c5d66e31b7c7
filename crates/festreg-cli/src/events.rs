//! # Events Subcommand
//!
//! Browse events: `festreg events list` and `festreg events show <id>`.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use festreg_client::FestClient;
use festreg_core::{Event, SubmissionGate};

/// Arguments for the `festreg events` subcommand.
#[derive(Args, Debug)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Subcommand, Debug)]
pub enum EventsCommand {
    /// List events.
    List {
        /// Print raw JSON instead of the summary table.
        #[arg(long)]
        json: bool,
    },
    /// Show one event in detail.
    Show {
        /// Event identifier.
        id: String,

        /// Print raw JSON instead of the summary.
        #[arg(long)]
        json: bool,
    },
}

pub async fn run_events(args: &EventsArgs, client: &FestClient) -> Result<()> {
    match &args.command {
        EventsCommand::List { json } => {
            let events = client.events().list().await?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                for event in &events {
                    println!(
                        "{:<24} {:<12} {:>3}/{:<3}  {}",
                        event.id.as_str(),
                        format!("{:?}", event.sub_fest).to_lowercase(),
                        event.registered_count,
                        event.capacity,
                        gate_label(event)
                    );
                }
            }
            Ok(())
        }
        EventsCommand::Show { id, json } => {
            let id = id.parse()?;
            let Some(event) = client.events().get(&id).await? else {
                bail!("event not found: {id}");
            };
            if *json {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                print_event(&event);
            }
            Ok(())
        }
    }
}

fn gate_label(event: &Event) -> &'static str {
    match event.submission_gate() {
        SubmissionGate::Open => "open",
        SubmissionGate::Closed => "closed",
        SubmissionGate::Full => "full",
    }
}

fn print_event(event: &Event) {
    println!("{} ({})", event.name, event.id);
    println!("  {}", event.description);
    println!("  venue:    {} @ {}", event.venue, event.timing);
    println!("  deadline: {}", event.registration_deadline);
    println!(
        "  filled:   {}/{} (registration {})",
        event.registered_count,
        event.capacity,
        gate_label(event)
    );
    if event.kind == festreg_core::EventKind::Team {
        println!(
            "  team:     {} - {} members",
            event.team_bounds.min(),
            event.team_bounds.max()
        );
    }
    if !event.coordinators.is_empty() {
        println!("  contact:  {}", event.coordinators.join(", "));
    }
}
