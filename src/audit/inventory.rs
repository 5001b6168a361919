//! Typed inventory model and the builder that assembles it from API records

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::client::{DeviceRecord, FixedIpAssignment, FleetApi, NetworkRecord, VlanRecord};
use crate::error::Result;

/// Display name used for devices without one
pub const NO_NAME: &str = "No Name";

/// DHCP handling string that marks a VLAN as running a DHCP server
const DHCP_SERVER_HANDLING: &str = "Run a DHCP server";

/// Model prefix of the camera product line
const CAMERA_MODEL_PREFIX: &str = "MV";

/// Model prefix of wireless access points
const ACCESS_POINT_MODEL_PREFIX: &str = "MR";

// ============================================================================
// Network
// ============================================================================

/// Kind of network, by the products it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkType {
    Appliance,
    Switch,
    Wireless,
    Camera,
    CellularGateway,
    /// More than one product type
    Combined,
    Other(String),
}

impl NetworkType {
    fn from_name(name: &str) -> Self {
        match name {
            "appliance" => NetworkType::Appliance,
            "switch" => NetworkType::Switch,
            "wireless" => NetworkType::Wireless,
            "camera" => NetworkType::Camera,
            "cellularGateway" => NetworkType::CellularGateway,
            "combined" => NetworkType::Combined,
            other => NetworkType::Other(other.to_string()),
        }
    }

    /// Derive the type from the legacy `type` field or the product type list.
    pub fn from_record(network_type: Option<&str>, product_types: &[String]) -> Self {
        if let Some(t) = network_type {
            return Self::from_name(t);
        }
        match product_types {
            [] => NetworkType::Other(String::new()),
            [single] => Self::from_name(single),
            _ => NetworkType::Combined,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetworkType::Appliance => "appliance",
            NetworkType::Switch => "switch",
            NetworkType::Wireless => "wireless",
            NetworkType::Camera => "camera",
            NetworkType::CellularGateway => "cellularGateway",
            NetworkType::Combined => "combined",
            NetworkType::Other(other) => other,
        };
        f.write_str(name)
    }
}

/// A site-level network
#[derive(Debug, Clone)]
pub struct Network {
    pub id: String,
    pub network_type: NetworkType,
    pub name: String,
    pub tags: Vec<String>,
    pub organization_id: String,
}

impl Network {
    pub fn from_record(record: NetworkRecord) -> Self {
        let network_type =
            NetworkType::from_record(record.network_type.as_deref(), &record.product_types);

        Self {
            id: record.id,
            network_type,
            name: record.name,
            tags: record.tags.map(|t| t.into_vec()).unwrap_or_default(),
            organization_id: record.organization_id,
        }
    }

    pub fn is_wireless_only(&self) -> bool {
        self.network_type == NetworkType::Wireless
    }
}

// ============================================================================
// Device
// ============================================================================

/// Where a device's management address comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressOrigin {
    Static,
    #[serde(rename = "DHCP")]
    Dhcp,
}

impl AddressOrigin {
    pub fn from_static_flag(using_static_ip: bool) -> Self {
        if using_static_ip {
            AddressOrigin::Static
        } else {
            AddressOrigin::Dhcp
        }
    }
}

impl fmt::Display for AddressOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressOrigin::Static => f.write_str("Static IP"),
            AddressOrigin::Dhcp => f.write_str("DHCP"),
        }
    }
}

/// Whether a model identifier belongs to the camera product class.
pub fn is_camera(model: &str) -> bool {
    model.starts_with(CAMERA_MODEL_PREFIX)
}

/// A managed device
#[derive(Debug, Clone)]
pub struct Device {
    pub serial: String,
    pub name: String,
    pub mac: String,
    pub network_id: String,
    pub model: String,
    pub notes: Option<String>,
    /// `None` when the management interface could not be read
    pub origin: Option<AddressOrigin>,
    pub management_ip: Option<String>,
}

impl Device {
    pub fn from_record(record: DeviceRecord, origin: Option<AddressOrigin>) -> Self {
        Self {
            serial: record.serial,
            name: record
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| NO_NAME.to_string()),
            mac: record.mac,
            network_id: record.network_id,
            model: record.model,
            notes: record.notes.filter(|n| !n.is_empty()),
            origin,
            management_ip: record.lan_ip.filter(|ip| !ip.trim().is_empty()),
        }
    }

    /// First two characters of the model, e.g. `MS` for `MS120-8`.
    pub fn model_family(&self) -> &str {
        self.model.get(..2).unwrap_or(&self.model)
    }

    pub fn is_access_point(&self) -> bool {
        self.model.starts_with(ACCESS_POINT_MODEL_PREFIX)
    }
}

/// Sort devices by model family then serial, both descending.
pub fn sort_devices(devices: &mut [Device]) {
    devices.sort_by(|a, b| {
        (b.model_family(), b.serial.as_str()).cmp(&(a.model_family(), a.serial.as_str()))
    });
}

// ============================================================================
// VLAN
// ============================================================================

/// How a VLAN answers DHCP requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DhcpMode {
    /// The appliance runs a DHCP server
    Server,
    /// Requests are relayed to another server
    Relay,
    /// DHCP is not answered
    None,
}

impl DhcpMode {
    /// Map the free-form handling string; only the server wording enables lookups.
    pub fn from_handling(handling: Option<&str>) -> Self {
        match handling.map(str::trim) {
            Some(h) if h.eq_ignore_ascii_case(DHCP_SERVER_HANDLING) => DhcpMode::Server,
            Some(h) if h.to_ascii_lowercase().starts_with("relay") => DhcpMode::Relay,
            _ => DhcpMode::None,
        }
    }
}

/// A MAC-bound DHCP reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationEntry {
    pub mac: String,
    pub ip: String,
    pub label: Option<String>,
}

/// Reservations configured on one VLAN
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reservations {
    /// No fixed IP assignments at all
    Empty,
    Entries(Vec<ReservationEntry>),
}

impl Reservations {
    pub fn from_table(table: Option<BTreeMap<String, FixedIpAssignment>>) -> Self {
        let entries: Vec<ReservationEntry> = table
            .unwrap_or_default()
            .into_iter()
            .map(|(mac, assignment)| ReservationEntry {
                mac,
                ip: assignment.ip,
                label: assignment.name.filter(|n| !n.is_empty()),
            })
            .collect();

        if entries.is_empty() {
            Reservations::Empty
        } else {
            Reservations::Entries(entries)
        }
    }

    /// Find the reservation bound to `mac` (ASCII case-insensitive).
    pub fn find(&self, mac: &str) -> Option<&ReservationEntry> {
        match self {
            Reservations::Empty => None,
            Reservations::Entries(entries) => {
                entries.iter().find(|e| e.mac.eq_ignore_ascii_case(mac))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Reservations::Empty => 0,
            Reservations::Entries(entries) => entries.len(),
        }
    }
}

/// An appliance VLAN
#[derive(Debug, Clone)]
pub struct Vlan {
    pub id: String,
    pub name: String,
    pub subnet: String,
    pub reservations: Reservations,
    pub dhcp_mode: DhcpMode,
}

impl Vlan {
    pub fn from_record(record: VlanRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            subnet: record.subnet,
            reservations: Reservations::from_table(record.fixed_ip_assignments),
            dhcp_mode: DhcpMode::from_handling(record.dhcp_handling.as_deref()),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Everything the resolver needs about one network
#[derive(Debug, Clone)]
pub struct NetworkInventory {
    pub network: Network,
    pub devices: Vec<Device>,
    pub vlans: Vec<Vlan>,
}

/// Builds typed inventory from a [`FleetApi`] source.
pub struct InventoryBuilder<'a, A: FleetApi + ?Sized> {
    api: &'a A,
}

impl<'a, A: FleetApi + ?Sized> InventoryBuilder<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// All networks of an organization, in API order.
    pub async fn networks(&self, org_id: &str) -> Result<Vec<Network>> {
        let records = self.api.list_networks(org_id).await?;
        debug!("Fetched {} networks for org {}", records.len(), org_id);

        Ok(records
            .into_iter()
            .map(Network::from_record)
            .filter(|network| {
                let belongs = network.organization_id == org_id;
                if !belongs {
                    warn!(
                        "Skipping network {} listed under org {} but owned by {}",
                        network.id, org_id, network.organization_id
                    );
                }
                belongs
            })
            .collect())
    }

    /// Non-camera devices of a network, sorted for reporting.
    pub async fn devices(&self, network: &Network) -> Result<Vec<Device>> {
        let records = self.api.list_devices(&network.id).await?;
        debug!("Fetched {} devices for {}", records.len(), network.name);

        let mut devices = Vec::with_capacity(records.len());
        for record in records {
            if is_camera(&record.model) {
                debug!("Skipping camera {} ({})", record.serial, record.model);
                continue;
            }

            let mut device = Device::from_record(record, None);
            if device.network_id != network.id {
                warn!(
                    "Skipping device {} listed under {} but assigned to {}",
                    device.serial, network.id, device.network_id
                );
                continue;
            }

            device.origin = self.origin(&network.id, &device.serial).await?;
            devices.push(device);
        }

        sort_devices(&mut devices);
        Ok(devices)
    }

    /// Read the static-IP flag; non-fatal failures leave the origin unknown.
    async fn origin(&self, network_id: &str, serial: &str) -> Result<Option<AddressOrigin>> {
        match self.api.get_management_interface(network_id, serial).await {
            Ok(mgmt) => {
                let origin = mgmt.using_static_ip().map(AddressOrigin::from_static_flag);
                if origin.is_none() {
                    debug!("No uplink addressing reported for {}", serial);
                }
                Ok(origin)
            }
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                warn!("Unable to read management interface for {}: {}", serial, e);
                Ok(None)
            }
        }
    }

    /// VLANs of a network; networks without VLAN support yield an empty list.
    pub async fn vlans(&self, network: &Network) -> Result<Vec<Vlan>> {
        match self.api.list_vlans(&network.id).await {
            Ok(records) => {
                let vlans: Vec<Vlan> = records.into_iter().map(Vlan::from_record).collect();
                for vlan in &vlans {
                    debug!(
                        "VLAN {} {} on {}: {:?}, {} reservations",
                        vlan.id,
                        vlan.subnet,
                        network.name,
                        vlan.dhcp_mode,
                        vlan.reservations.len()
                    );
                }
                Ok(vlans)
            }
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                debug!("No VLANs for {}: {}", network.name, e);
                Ok(Vec::new())
            }
        }
    }

    /// Devices and VLANs of one network.
    pub async fn network_inventory(&self, network: Network) -> Result<NetworkInventory> {
        let devices = self.devices(&network).await?;
        let vlans = self.vlans(&network).await?;

        Ok(NetworkInventory {
            network,
            devices,
            vlans,
        })
    }
}
