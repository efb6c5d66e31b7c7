//! # festreg-cli library
//!
//! Subcommand handlers for the `festreg` binary, plus the shared client
//! construction and the console retry-feedback notifier.

pub mod admin;
pub mod events;
pub mod register;

use std::sync::Arc;

use anyhow::Context;
use url::Url;

use festreg_client::{FestApiConfig, FestClient, RetryNotifier, Session};

/// Retry feedback on stderr: the terminal equivalent of the web app's
/// persistent "connecting" toast.
pub struct ConsoleNotifier;

impl RetryNotifier for ConsoleNotifier {
    fn on_retry_start(&self, _attempt: u32) {
        eprintln!(
            "Connecting to server... please wait. \
             (Cold-started backends can take a little while; if you're on \
             mobile data, try a different network.)"
        );
    }

    fn on_final_failure(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Build a client from the environment, with optional flag overrides for
/// the backend URL and bearer token (`FESTREG_TOKEN` is the env fallback).
pub fn build_client(
    backend_url: Option<Url>,
    token: Option<String>,
) -> anyhow::Result<FestClient> {
    let mut config = FestApiConfig::from_env().context("invalid backend configuration")?;
    if let Some(url) = backend_url {
        config.base_url = url;
    }

    let session = match token.or_else(|| std::env::var("FESTREG_TOKEN").ok()) {
        Some(token) => Session::with_token(token),
        None => Session::anonymous(),
    };

    FestClient::with_parts(config, Arc::new(session), Arc::new(ConsoleNotifier))
        .context("failed to construct API client")
}
