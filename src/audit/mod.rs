//! Device address-origin audit
//!
//! The pipeline runs one organization at a time: select organizations by
//! name, build each network's inventory, resolve every device and hand the
//! organization's results to a [`ReportSink`].

use log::{debug, info, warn};

use crate::client::FleetApi;
use crate::error::{Error, Result};
use crate::report::ReportSink;

pub mod filter;
pub mod inventory;
pub mod resolver;
pub mod subnet;

pub use filter::{OrgFilter, Organization, select_organizations};
pub use inventory::InventoryBuilder;
pub use resolver::{AssignmentResult, ResolvedOrigin, resolve_inventory};

/// Counters for one audit run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub organizations: usize,
    pub devices: usize,
    /// Organizations without any switch, appliance or access point
    pub empty_organizations: usize,
    /// Organizations skipped after a non-fatal API error
    pub failed_organizations: usize,
    pub sink_failures: usize,
}

/// Resolve every device of one organization, network by network.
pub async fn audit_organization<A: FleetApi + ?Sized>(
    api: &A,
    org: &Organization,
) -> Result<Vec<AssignmentResult>> {
    let builder = InventoryBuilder::new(api);
    let networks = builder.networks(&org.id).await?;
    info!("Auditing {} ({} networks)", org.name, networks.len());

    let mut results = Vec::new();
    for network in networks {
        debug!(
            "Network {} ({}) tags [{}]",
            network.name,
            network.network_type,
            network.tags.join(" ")
        );
        let inventory = builder.network_inventory(network).await?;
        if inventory.devices.is_empty() {
            debug!("No switches or access points in {}", inventory.network.name);
            continue;
        }
        results.extend(resolve_inventory(&inventory));
    }

    Ok(results)
}

/// Audit every organization matching `filter`, in name order.
///
/// Sink failures and non-fatal API errors are logged and counted; the
/// affected organization is skipped and the run moves on. Fatal API errors
/// abort it.
pub async fn run<A: FleetApi + ?Sized>(
    api: &A,
    filter: &OrgFilter,
    sink: &mut dyn ReportSink,
) -> Result<AuditSummary> {
    let records = api.list_organizations().await?;
    let orgs = select_organizations(filter, &records);
    if orgs.is_empty() {
        return Err(Error::NoMatchingOrganizations(filter.to_string()));
    }
    debug!("{} of {} organizations match {}", orgs.len(), records.len(), filter);

    let mut summary = AuditSummary::default();
    for org in &orgs {
        sink.begin(org);
        let results = match audit_organization(api, org).await {
            Ok(results) => results,
            Err(e) if !e.is_fatal() => {
                warn!("Skipping {}: {}", org.name, e);
                summary.failed_organizations += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        summary.organizations += 1;
        summary.devices += results.len();
        if results.is_empty() {
            summary.empty_organizations += 1;
        }

        if let Err(e) = sink.emit(org, &results) {
            warn!("{}", e);
            summary.sink_failures += 1;
        }
    }

    if let Err(e) = sink.finish() {
        warn!("{}", e);
        summary.sink_failures += 1;
    }

    Ok(summary)
}
