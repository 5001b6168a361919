//! Organization selection arguments

use std::path::PathBuf;

use clap::Args;

use crate::audit::filter::ALL_ORGANIZATIONS;
use crate::cli::completions::org_name_candidates;

/// Arguments for `fleetip audit`
#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    /// Organization name, `/all`, or a name with one `*` wildcard (e.g. "Acme*")
    #[arg(long, short = 'o', env = "FLEETIP_ORG", hide_env = true, add = org_name_candidates())]
    pub org: String,

    /// Also save the report as a JSON document
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Arguments for `fleetip org list`
#[derive(Debug, Clone, Args, Default)]
pub struct OrgListArgs {
    /// Only list organizations matching this name or pattern
    #[arg(long, add = org_name_candidates())]
    pub filter: Option<String>,
}

impl OrgListArgs {
    /// The filter to apply, `/all` when none was given.
    pub fn filter_or_all(&self) -> &str {
        self.filter.as_deref().unwrap_or(ALL_ORGANIZATIONS)
    }
}
