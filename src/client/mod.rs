//! Fleet management API client

use async_trait::async_trait;

use crate::error::Result;

pub mod fleet;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod rate_limit;

pub use fleet::FleetClient;
#[cfg(test)]
pub use mock::MockFleetClient;
pub use models::{
    DeviceRecord, FixedIpAssignment, ManagementInterface, NetworkRecord, OrganizationRecord,
    VlanRecord,
};

/// Read-only view of the fleet management API.
///
/// Every method maps to a single listing call. Implementations own request
/// pacing and timeouts; callers issue calls sequentially.
#[async_trait]
pub trait FleetApi: Send + Sync {
    /// List all organizations the API key can access
    async fn list_organizations(&self) -> Result<Vec<OrganizationRecord>>;

    /// List all networks (every product type) in an organization
    async fn list_networks(&self, org_id: &str) -> Result<Vec<NetworkRecord>>;

    /// List devices claimed into a network
    async fn list_devices(&self, network_id: &str) -> Result<Vec<DeviceRecord>>;

    /// Get uplink/management addressing settings for a device
    async fn get_management_interface(
        &self,
        network_id: &str,
        serial: &str,
    ) -> Result<ManagementInterface>;

    /// List appliance VLANs for a network
    async fn list_vlans(&self, network_id: &str) -> Result<Vec<VlanRecord>>;
}
