//! Organization command implementations

use log::debug;

use crate::audit::{OrgFilter, select_organizations};
use crate::cli::args::{GlobalOptions, OrgListArgs};
use crate::cli::CommandContext;
use crate::client::FleetApi;
use crate::error::Result;
use crate::models::OrgDisplay;
use crate::output::Formattable;

/// Run the org list command
pub async fn list(opts: &GlobalOptions, args: &OrgListArgs) -> Result<()> {
    let filter = OrgFilter::parse(args.filter_or_all())?;
    let ctx = CommandContext::new(opts)?;

    let orgs = ctx.client.list_organizations().await?;
    debug!("Fetched {} organizations", orgs.len());

    let display: Vec<OrgDisplay> = select_organizations(&filter, &orgs)
        .into_iter()
        .map(OrgDisplay::from)
        .collect();
    display.print(ctx.format)?;

    Ok(())
}
