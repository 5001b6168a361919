//! Organization models

use serde::{Deserialize, Serialize};

/// Organization resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationRecord {
    /// Organization ID
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,

    /// Organization name
    pub name: String,
}
