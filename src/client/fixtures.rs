//! Test fixtures and builders for API record types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use std::collections::BTreeMap;

use super::models::{
    DeviceRecord, FixedIpAssignment, ManagementInterface, NetworkRecord, OrganizationRecord,
    Tags, VlanRecord, WanInterface,
};

/// Management interface settings with the given static-IP flag.
pub fn management(using_static_ip: bool) -> ManagementInterface {
    ManagementInterface {
        wan1: Some(WanInterface {
            using_static_ip: Some(using_static_ip),
        }),
    }
}

// ============================================================================
// OrganizationBuilder
// ============================================================================

/// Builder for creating test OrganizationRecord instances.
#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    id: String,
    name: String,
}

impl OrganizationBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Organization {}", &id),
            id,
        }
    }

    /// Set the organization name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Build the OrganizationRecord.
    pub fn build(self) -> OrganizationRecord {
        OrganizationRecord {
            id: self.id,
            name: self.name,
        }
    }
}

// ============================================================================
// NetworkBuilder
// ============================================================================

/// Builder for creating test NetworkRecord instances.
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    id: String,
    organization_id: String,
    name: String,
    product_types: Vec<String>,
    tags: Vec<String>,
}

impl NetworkBuilder {
    /// Create a new appliance network in the given organization.
    pub fn new(id: impl Into<String>, organization_id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Network {}", &id),
            id,
            organization_id: organization_id.into(),
            product_types: vec!["appliance".to_string()],
            tags: Vec::new(),
        }
    }

    /// Set the network name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the product types.
    pub fn product_types(mut self, types: &[&str]) -> Self {
        self.product_types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Build the NetworkRecord.
    pub fn build(self) -> NetworkRecord {
        NetworkRecord {
            id: self.id,
            organization_id: self.organization_id,
            name: self.name,
            network_type: None,
            product_types: self.product_types,
            tags: Some(Tags::List(self.tags)),
        }
    }
}

// ============================================================================
// DeviceBuilder
// ============================================================================

/// Builder for creating test DeviceRecord instances.
#[derive(Debug, Clone)]
pub struct DeviceBuilder {
    serial: String,
    name: Option<String>,
    mac: String,
    network_id: String,
    model: String,
    notes: Option<String>,
    lan_ip: Option<String>,
}

impl DeviceBuilder {
    /// Create a new MS switch in network `N_1` with the given serial.
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            name: None,
            mac: "00:18:0a:00:00:01".to_string(),
            network_id: "N_1".to_string(),
            model: "MS120-8".to_string(),
            notes: None,
            lan_ip: Some("10.0.1.10".to_string()),
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the MAC address.
    pub fn mac(mut self, mac: impl Into<String>) -> Self {
        self.mac = mac.into();
        self
    }

    /// Set the network ID.
    pub fn network(mut self, network_id: impl Into<String>) -> Self {
        self.network_id = network_id.into();
        self
    }

    /// Set the model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set the management IP.
    pub fn lan_ip(mut self, ip: impl Into<String>) -> Self {
        self.lan_ip = Some(ip.into());
        self
    }

    /// Remove the management IP.
    pub fn no_lan_ip(mut self) -> Self {
        self.lan_ip = None;
        self
    }

    /// Build the DeviceRecord.
    pub fn build(self) -> DeviceRecord {
        DeviceRecord {
            serial: self.serial,
            name: self.name,
            mac: self.mac,
            network_id: self.network_id,
            model: self.model,
            notes: self.notes,
            lan_ip: self.lan_ip,
        }
    }
}

// ============================================================================
// VlanBuilder
// ============================================================================

/// Builder for creating test VlanRecord instances.
#[derive(Debug, Clone)]
pub struct VlanBuilder {
    id: String,
    name: String,
    subnet: String,
    assignments: BTreeMap<String, FixedIpAssignment>,
    dhcp_handling: Option<String>,
}

impl VlanBuilder {
    /// Create a new VLAN running a DHCP server on `subnet`.
    pub fn new(id: impl Into<String>, subnet: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("VLAN {}", &id),
            id,
            subnet: subnet.into(),
            assignments: BTreeMap::new(),
            dhcp_handling: Some("Run a DHCP server".to_string()),
        }
    }

    /// Set the VLAN name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the DHCP handling string.
    pub fn dhcp_handling(mut self, handling: impl Into<String>) -> Self {
        self.dhcp_handling = Some(handling.into());
        self
    }

    /// Add a fixed IP assignment.
    pub fn reservation(mut self, mac: impl Into<String>, ip: impl Into<String>) -> Self {
        self.assignments.insert(
            mac.into(),
            FixedIpAssignment {
                ip: ip.into(),
                name: None,
            },
        );
        self
    }

    /// Build the VlanRecord.
    pub fn build(self) -> VlanRecord {
        VlanRecord {
            id: self.id,
            name: self.name,
            subnet: self.subnet,
            fixed_ip_assignments: Some(self.assignments),
            dhcp_handling: self.dhcp_handling,
        }
    }
}
