//! Fleet API data models
//!
//! Raw records as returned by the dashboard API. Optional keys are explicit
//! `Option` fields; the audit layer turns these into typed entities.

use serde::{Deserialize, Deserializer};

mod device;
mod network;
mod org;
mod vlan;

pub use device::{DeviceRecord, ManagementInterface};
pub use network::NetworkRecord;
#[cfg(test)]
pub use device::WanInterface;
#[cfg(test)]
pub use network::Tags;
pub use org::OrganizationRecord;
pub use vlan::{FixedIpAssignment, VlanRecord};

/// Accept identifiers sent either as JSON strings or numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
