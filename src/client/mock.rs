//! Mock fleet API client for testing
//!
//! Provides a mock implementation of [`FleetApi`] for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::FleetApi;
use super::models::{
    DeviceRecord, ManagementInterface, NetworkRecord, OrganizationRecord, VlanRecord,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockFleetClient::new()
///     .with_orgs(vec![OrganizationBuilder::new("1").name("Acme").build()])
///     .await;
///
/// let orgs = mock.list_organizations().await?;
/// assert_eq!(orgs.len(), 1);
/// ```
#[derive(Default)]
pub struct MockFleetClient {
    /// Organizations to return from list_organizations
    orgs: Arc<Mutex<Vec<OrganizationRecord>>>,
    /// Networks keyed by organization ID
    networks: Arc<Mutex<HashMap<String, Vec<NetworkRecord>>>>,
    /// Devices keyed by network ID
    devices: Arc<Mutex<HashMap<String, Vec<DeviceRecord>>>>,
    /// Management interface settings keyed by serial
    management: Arc<Mutex<HashMap<String, ManagementInterface>>>,
    /// VLANs keyed by network ID
    vlans: Arc<Mutex<HashMap<String, Vec<VlanRecord>>>>,
    /// One-shot errors keyed by "method:id"
    failures: Arc<Mutex<HashMap<String, ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub list_networks: usize,
    pub list_devices: usize,
    pub get_management_interface: usize,
    pub list_vlans: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_organizations
            + self.list_networks
            + self.list_devices
            + self.get_management_interface
            + self.list_vlans
    }
}

impl MockFleetClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organizations to return from list_organizations.
    pub async fn with_orgs(self, orgs: Vec<OrganizationRecord>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Add networks; each is filed under its own organization ID.
    pub async fn with_networks(self, networks: Vec<NetworkRecord>) -> Self {
        {
            let mut map = self.networks.lock().await;
            for network in networks {
                map.entry(network.organization_id.clone())
                    .or_default()
                    .push(network);
            }
        }
        self
    }

    /// Add devices listed under `network_id`, with their static-IP flag.
    ///
    /// A `None` flag leaves the device without management interface data,
    /// so the lookup fails with `NotFound`.
    pub async fn with_devices(
        self,
        network_id: &str,
        devices: Vec<(DeviceRecord, Option<bool>)>,
    ) -> Self {
        {
            let mut listed = self.devices.lock().await;
            let mut management = self.management.lock().await;
            let entry = listed.entry(network_id.to_string()).or_default();
            for (device, using_static_ip) in devices {
                if let Some(flag) = using_static_ip {
                    management.insert(device.serial.clone(), super::fixtures::management(flag));
                }
                entry.push(device);
            }
        }
        self
    }

    /// Configure VLANs to return for `network_id`.
    pub async fn with_vlans(self, network_id: &str, vlans: Vec<VlanRecord>) -> Self {
        self.vlans.lock().await.insert(network_id.to_string(), vlans);
        self
    }

    /// Fail the next call of `method` for `id` (org ID, network ID or serial).
    /// The error is consumed after one use.
    pub async fn with_failure(self, method: &str, id: &str, error: ApiError) -> Self {
        self.failures
            .lock()
            .await
            .insert(format!("{}:{}", method, id), error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Consume a configured failure for this call, if any.
    async fn check_failure(&self, method: &str, id: &str) -> Result<()> {
        let mut failures = self.failures.lock().await;
        match failures.remove(&format!("{}:{}", method, id)) {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FleetApi for MockFleetClient {
    async fn list_organizations(&self) -> Result<Vec<OrganizationRecord>> {
        self.call_count.lock().await.list_organizations += 1;
        self.check_failure("list_organizations", "").await?;

        Ok(self.orgs.lock().await.clone())
    }

    async fn list_networks(&self, org_id: &str) -> Result<Vec<NetworkRecord>> {
        self.call_count.lock().await.list_networks += 1;
        self.check_failure("list_networks", org_id).await?;

        Ok(self
            .networks
            .lock()
            .await
            .get(org_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_devices(&self, network_id: &str) -> Result<Vec<DeviceRecord>> {
        self.call_count.lock().await.list_devices += 1;
        self.check_failure("list_devices", network_id).await?;

        Ok(self
            .devices
            .lock()
            .await
            .get(network_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_management_interface(
        &self,
        _network_id: &str,
        serial: &str,
    ) -> Result<ManagementInterface> {
        self.call_count.lock().await.get_management_interface += 1;
        self.check_failure("get_management_interface", serial)
            .await?;

        self.management
            .lock()
            .await
            .get(serial)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("device {}", serial)).into())
    }

    async fn list_vlans(&self, network_id: &str) -> Result<Vec<VlanRecord>> {
        self.call_count.lock().await.list_vlans += 1;
        self.check_failure("list_vlans", network_id).await?;

        Ok(self
            .vlans
            .lock()
            .await
            .get(network_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{DeviceBuilder, NetworkBuilder, OrganizationBuilder};

    #[tokio::test]
    async fn test_mock_returns_configured_data() {
        let mock = MockFleetClient::new()
            .with_orgs(vec![OrganizationBuilder::new("1").name("Acme").build()])
            .await
            .with_networks(vec![NetworkBuilder::new("N_1", "1").build()])
            .await
            .with_devices("N_1", vec![(DeviceBuilder::new("Q-1").build(), Some(true))])
            .await;

        assert_eq!(mock.list_organizations().await.unwrap().len(), 1);
        assert_eq!(mock.list_networks("1").await.unwrap().len(), 1);
        assert!(mock.list_networks("2").await.unwrap().is_empty());
        assert_eq!(mock.list_devices("N_1").await.unwrap().len(), 1);
        assert_eq!(
            mock.get_management_interface("N_1", "Q-1")
                .await
                .unwrap()
                .using_static_ip(),
            Some(true)
        );
        assert!(mock.list_vlans("N_1").await.unwrap().is_empty());

        let counts = mock.call_counts().await;
        assert_eq!(counts.total(), 6);
    }

    #[tokio::test]
    async fn test_failure_is_consumed_once() {
        let mock = MockFleetClient::new()
            .with_failure("list_vlans", "N_1", ApiError::Forbidden)
            .await;

        assert!(mock.list_vlans("N_1").await.is_err());
        assert!(mock.list_vlans("N_1").await.is_ok());
        assert_eq!(mock.call_counts().await.list_vlans, 2);
    }

    #[tokio::test]
    async fn test_missing_management_data_is_not_found() {
        let mock = MockFleetClient::new()
            .with_devices("N_1", vec![(DeviceBuilder::new("Q-2").build(), None)])
            .await;

        let err = mock.get_management_interface("N_1", "Q-2").await.unwrap_err();
        assert!(matches!(err, crate::error::Error::Api(ApiError::NotFound(_))));
    }
}
