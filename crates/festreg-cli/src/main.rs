//! # festreg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use festreg_cli::admin::{run_admin, AdminArgs};
use festreg_cli::events::{run_events, EventsArgs};
use festreg_cli::register::{run_register, RegisterArgs};

/// festreg — event registration for the college festival.
///
/// Talks to the festival REST backend with automatic retry for
/// cold-starting hosts. Registrations are validated locally (team size,
/// member completeness, open/full gating) before anything is sent.
#[derive(Parser, Debug)]
#[command(name = "festreg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Backend base URL (overrides FESTREG_BACKEND_URL).
    #[arg(long, global = true)]
    backend_url: Option<Url>,

    /// Bearer token (overrides FESTREG_TOKEN).
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse events.
    Events(EventsArgs),

    /// Register for an event (validates locally before submitting).
    Register(RegisterArgs),

    /// Registration-window controls and data export.
    Admin(AdminArgs),

    /// Ping the backend's health endpoint to warm a cold start.
    Wake,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let client = match festreg_cli::build_client(cli.backend_url, cli.token) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Events(args) => run_events(&args, &client).await,
        Commands::Register(args) => run_register(&args, &client).await,
        Commands::Admin(args) => run_admin(&args, &client).await,
        Commands::Wake => {
            if client.wake_up().await {
                println!("Backend is awake");
            } else {
                println!("Backend did not answer; it may still be cold-starting");
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
