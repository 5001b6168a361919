//! Shell completions for the fleetip CLI
//!
//! Static scripts come from `fleetip completion <shell>`. Dynamic TAB
//! completion of organization names queries the dashboard API at
//! completion time (`COMPLETE=<shell> fleetip`).

use std::io;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::engine::{ArgValueCandidates, CompletionCandidate};

use crate::audit::filter::ALL_ORGANIZATIONS;
use crate::cli::{Cli, Shell};
use crate::client::{FleetApi, FleetClient};
use crate::config::Config;
use crate::error::Result;

/// Maximum number of completion candidates to return
const MAX_COMPLETIONS: usize = 50;

/// Timeout for completion API calls
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(5);

/// Write a static completion script for `shell` to stdout.
pub fn generate(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Create a blocking runtime for completion API calls.
///
/// Completers are called synchronously by the shell.
fn blocking_runtime() -> Option<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .ok()
}

/// Client from config and environment. Errors are silent: completions
/// should never break the shell.
fn completion_client() -> Option<FleetClient> {
    let config_path = std::env::var("FLEETIP_CONFIG").ok();
    let api_key = std::env::var("FLEETIP_API_KEY").ok();
    let api_host = std::env::var("FLEETIP_API_HOST").ok();

    let config = Config::load_at(config_path.as_deref())
        .unwrap_or_default()
        .with_overrides(api_key.as_deref(), api_host.as_deref());

    FleetClient::from_config(&config).ok()
}

/// Complete organization names, plus the `/all` keyword.
///
/// Note: clap_complete handles prefix filtering - we return all candidates.
pub fn complete_org_names() -> Vec<CompletionCandidate> {
    let mut candidates = vec![
        CompletionCandidate::new(ALL_ORGANIZATIONS).help(Some("every organization".into())),
    ];

    let Some(client) = completion_client() else {
        return candidates;
    };
    let Some(rt) = blocking_runtime() else {
        return candidates;
    };

    let result =
        rt.block_on(async { tokio::time::timeout(COMPLETION_TIMEOUT, client.list_organizations()).await });

    let mut orgs = match result {
        Ok(Ok(orgs)) => orgs,
        _ => return candidates,
    };
    orgs.sort_by(|a, b| a.name.cmp(&b.name));

    candidates.extend(
        orgs.into_iter()
            .take(MAX_COMPLETIONS)
            .map(|org| CompletionCandidate::new(org.name).help(Some(org.id.into()))),
    );
    candidates
}

/// Create completion candidates for organization names.
pub fn org_name_candidates() -> ArgValueCandidates {
    ArgValueCandidates::new(complete_org_names)
}
