//! VLAN models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Appliance VLAN resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanRecord {
    /// VLAN ID (numeric in current API versions)
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,

    /// VLAN name
    pub name: String,

    /// Subnet in CIDR notation
    #[serde(default)]
    pub subnet: String,

    /// DHCP reservations keyed by MAC address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_ip_assignments: Option<BTreeMap<String, FixedIpAssignment>>,

    /// Free-form DHCP handling mode (e.g. "Run a DHCP server")
    #[serde(default)]
    pub dhcp_handling: Option<String>,
}

/// A single fixed IP assignment (DHCP reservation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedIpAssignment {
    /// Reserved address
    pub ip: String,

    /// Optional label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vlan_record() {
        let json = r#"{
            "id": 10,
            "networkId": "N_1",
            "name": "Management",
            "applianceIp": "10.0.1.1",
            "subnet": "10.0.1.0/24",
            "fixedIpAssignments": {
                "aa:bb:cc:dd:ee:ff": {"ip": "10.0.1.50", "name": "core-switch"},
                "11:22:33:44:55:66": {"ip": "10.0.1.51"}
            },
            "dhcpHandling": "Run a DHCP server"
        }"#;

        let vlan: VlanRecord = serde_json::from_str(json).unwrap();
        assert_eq!(vlan.id, "10");
        let table = vlan.fixed_ip_assignments.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["aa:bb:cc:dd:ee:ff"].name.as_deref(), Some("core-switch"));
        assert!(table["11:22:33:44:55:66"].name.is_none());
    }

    #[test]
    fn test_vlan_record_without_assignments() {
        let json = r#"{"id": "1", "name": "Default", "subnet": "192.168.128.0/24"}"#;
        let vlan: VlanRecord = serde_json::from_str(json).unwrap();
        assert!(vlan.fixed_ip_assignments.is_none());
        assert!(vlan.dhcp_handling.is_none());
    }
}
