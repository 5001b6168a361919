//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use crate::audit::Organization;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Position in the name-sorted list
    #[tabled(rename = "#")]
    pub ordinal: usize,

    /// Organization ID
    #[tabled(rename = "ORG ID")]
    pub id: String,

    /// Organization name
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self {
            ordinal: org.ordinal,
            id: org.id,
            name: org.name,
        }
    }
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            ordinal: org.ordinal,
            id: org.id.clone(),
            name: org.name.clone(),
        }
    }
}
