//! Assignment resolution: static vs DHCP, serving VLAN and reservation

use std::fmt;

use log::debug;
use serde::Serialize;

use super::inventory::{AddressOrigin, Device, DhcpMode, Network, NetworkInventory, Vlan};
use super::subnet::{self, Ipv4Cidr};

/// Annotation for access points without an address (usually mesh repeaters)
pub const REPEATER_NOTE: &str = "Repeater AP?";

/// Annotation for any other device without an address
pub const NO_IP_NOTE: &str = "No IP address";

/// Annotation for an addressed device whose uplink settings could not be read
pub const ORIGIN_UNKNOWN_NOTE: &str = "Origin unknown";

/// Annotation for an addressed device whose address does not parse
pub const INVALID_IP_NOTE: &str = "Invalid IP";

/// Final classification of a device's management address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResolvedOrigin {
    #[serde(rename = "Static")]
    Static,
    #[serde(rename = "DHCP-unreserved")]
    DhcpUnreserved,
    #[serde(rename = "DHCP-reserved")]
    DhcpReserved,
    #[serde(rename = "Unknown-no-IP")]
    UnknownNoIp,
}

impl fmt::Display for ResolvedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResolvedOrigin::Static => "Static",
            ResolvedOrigin::DhcpUnreserved => "DHCP-unreserved",
            ResolvedOrigin::DhcpReserved => "DHCP-reserved",
            ResolvedOrigin::UnknownNoIp => "Unknown-no-IP",
        };
        f.write_str(label)
    }
}

/// Per-device verdict handed to report sinks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentResult {
    pub serial: String,
    pub device_name: String,
    pub model: String,
    pub mac: String,
    pub management_ip: Option<String>,
    pub network_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub wireless_only: bool,
    pub origin: ResolvedOrigin,
    /// VLAN whose DHCP server issued the address
    pub vlan_name: Option<String>,
    pub reservation_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl AssignmentResult {
    fn new(device: &Device, network: &Network, origin: ResolvedOrigin) -> Self {
        Self {
            serial: device.serial.clone(),
            device_name: device.name.clone(),
            model: device.model.clone(),
            mac: device.mac.clone(),
            management_ip: device.management_ip.clone(),
            network_name: network.name.clone(),
            notes: device.notes.clone(),
            wireless_only: network.is_wireless_only(),
            origin,
            vlan_name: None,
            reservation_ip: None,
            annotation: None,
        }
    }

    /// Degraded verdict; the note only blames a missing address when there is none.
    fn unknown(device: &Device, network: &Network, addressed_note: &str) -> Self {
        let note = match device.management_ip {
            Some(_) => addressed_note,
            None if device.is_access_point() => REPEATER_NOTE,
            None => NO_IP_NOTE,
        };
        Self {
            annotation: Some(note.to_string()),
            ..Self::new(device, network, ResolvedOrigin::UnknownNoIp)
        }
    }
}

/// Classify one device against the VLANs of its network.
pub fn resolve_device(device: &Device, network: &Network, vlans: &[Vlan]) -> AssignmentResult {
    let (ip, origin) = match (device.management_ip.as_deref(), device.origin) {
        (Some(ip), Some(origin)) => (ip, origin),
        _ => return AssignmentResult::unknown(device, network, ORIGIN_UNKNOWN_NOTE),
    };

    if origin == AddressOrigin::Static {
        return AssignmentResult::new(device, network, ResolvedOrigin::Static);
    }

    let ip = match subnet::parse_ip(ip) {
        Ok(ip) => ip,
        Err(e) => {
            debug!("{} ({}): {}", device.serial, device.name, e);
            return AssignmentResult::unknown(device, network, INVALID_IP_NOTE);
        }
    };

    let serving = vlans
        .iter()
        .filter(|vlan| vlan.dhcp_mode == DhcpMode::Server)
        .find(|vlan| match vlan.subnet.parse::<Ipv4Cidr>() {
            Ok(cidr) => cidr.contains(ip),
            Err(e) => {
                debug!("Skipping VLAN {} on {}: {}", vlan.id, network.name, e);
                false
            }
        });

    let mut result = AssignmentResult::new(device, network, ResolvedOrigin::DhcpUnreserved);
    if let Some(vlan) = serving {
        result.vlan_name = Some(vlan.name.clone());
        if let Some(reservation) = vlan.reservations.find(&device.mac) {
            debug!(
                "{} reserved at {} ({})",
                device.serial,
                reservation.ip,
                reservation.label.as_deref().unwrap_or("unlabelled")
            );
            result.origin = ResolvedOrigin::DhcpReserved;
            result.reservation_ip = Some(reservation.ip.clone());
        }
    }
    result
}

/// Classify every device of a network, in device order.
pub fn resolve_network(network: &Network, devices: &[Device], vlans: &[Vlan]) -> Vec<AssignmentResult> {
    devices
        .iter()
        .map(|device| resolve_device(device, network, vlans))
        .collect()
}

/// Shorthand for [`resolve_network`] over a built inventory.
pub fn resolve_inventory(inventory: &NetworkInventory) -> Vec<AssignmentResult> {
    resolve_network(&inventory.network, &inventory.devices, &inventory.vlans)
}
