//! Assignment result display model

use serde::Serialize;
use tabled::Tabled;

use crate::audit::{AssignmentResult, ResolvedOrigin};

/// Placeholder for empty cells
const EMPTY: &str = "--";

/// One device row of an organization report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AssignmentDisplay {
    #[tabled(rename = "NETWORK")]
    pub network: String,

    #[tabled(rename = "DEVICE")]
    pub device: String,

    #[tabled(rename = "MODEL")]
    pub model: String,

    #[tabled(rename = "SERIAL")]
    pub serial: String,

    /// Management IP, or the annotation when there is none
    #[tabled(rename = "IP ADDRESS")]
    pub ip: String,

    #[tabled(rename = "MAC")]
    pub mac: String,

    #[tabled(rename = "ORIGIN")]
    pub origin: String,

    #[tabled(rename = "WIRELESS-ONLY")]
    pub wireless_only: String,

    /// VLAN whose DHCP server issued the address
    #[tabled(rename = "DHCP VLAN")]
    pub vlan: String,

    #[tabled(rename = "RESERVATION")]
    pub reservation: String,
}

impl From<&AssignmentResult> for AssignmentDisplay {
    fn from(result: &AssignmentResult) -> Self {
        let ip = result
            .management_ip
            .clone()
            .or_else(|| result.annotation.clone())
            .unwrap_or_else(|| EMPTY.to_string());

        let reservation = match result.origin {
            ResolvedOrigin::Static => "Static IP".to_string(),
            ResolvedOrigin::DhcpReserved => result
                .reservation_ip
                .clone()
                .unwrap_or_else(|| EMPTY.to_string()),
            ResolvedOrigin::UnknownNoIp => result
                .annotation
                .clone()
                .unwrap_or_else(|| EMPTY.to_string()),
            ResolvedOrigin::DhcpUnreserved => EMPTY.to_string(),
        };

        Self {
            network: result.network_name.clone(),
            device: result.device_name.clone(),
            model: result.model.clone(),
            serial: result.serial.clone(),
            ip,
            mac: result.mac.clone(),
            origin: result.origin.to_string(),
            wireless_only: if result.wireless_only { "Yes" } else { "No" }.to_string(),
            vlan: result.vlan_name.clone().unwrap_or_else(|| EMPTY.to_string()),
            reservation,
        }
    }
}
