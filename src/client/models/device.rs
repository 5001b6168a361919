//! Device models

use serde::{Deserialize, Serialize};

/// Device resource as listed per network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    /// Serial number
    pub serial: String,

    /// Display name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// MAC address
    pub mac: String,

    /// Network the device is assigned to
    pub network_id: String,

    /// Model identifier (e.g. MX67, MS120-8, MR33)
    pub model: String,

    /// Free-form notes (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Management IP address (absent for repeaters and unreachable devices)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lan_ip: Option<String>,
}

/// Management interface settings for one device
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagementInterface {
    /// Primary uplink settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wan1: Option<WanInterface>,
}

/// Uplink addressing settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WanInterface {
    /// Whether the uplink uses a statically configured address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub using_static_ip: Option<bool>,
}

impl ManagementInterface {
    /// The `usingStaticIp` flag of the primary uplink, if reported.
    pub fn using_static_ip(&self) -> Option<bool> {
        self.wan1.as_ref().and_then(|w| w.using_static_ip)
    }
}
