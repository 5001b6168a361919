//! Network models

use serde::{Deserialize, Serialize};

/// Network resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    /// Network ID
    pub id: String,

    /// Organization the network belongs to
    #[serde(deserialize_with = "super::string_or_number")]
    pub organization_id: String,

    /// Network name
    pub name: String,

    /// Legacy single network type (`appliance`, `switch`, `wireless`, `combined`)
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,

    /// Product types present in the network
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_types: Vec<String>,

    /// Network tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

/// Network tags, sent either as a list or as one space-separated string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Tags {
    List(Vec<String>),
    Joined(String),
}

impl Tags {
    /// Flatten into individual tag strings.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Tags::List(tags) => tags.into_iter().filter(|t| !t.is_empty()).collect(),
            Tags::Joined(joined) => joined.split_whitespace().map(str::to_string).collect(),
        }
    }
}
