//! Market group records (marketGroups.yaml)

use std::collections::BTreeMap;

use serde::Deserialize;

/// A market group entry from the group definition file
///
/// The on-disk table is keyed by group id; the record body does not repeat
/// it, so the loader injects the map key into `group_id` after parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupRecord {
    #[serde(skip)]
    pub group_id: u32,

    /// Group name, in either the flat `groupName` form or the localized
    /// `nameID: {en: ...}` form used by current exports
    #[serde(rename = "nameID", alias = "groupName", default)]
    name: GroupName,

    #[serde(rename = "parentGroupID", default)]
    pub parent_group_id: Option<u32>,

    /// Icon reference; a separate keyspace from the group id
    #[serde(rename = "iconID", default)]
    pub icon_id: Option<u32>,

    /// Whether the group is a leaf holding sellable types
    #[serde(rename = "hasTypes", default)]
    pub has_types: bool,
}

impl GroupRecord {
    /// English name of the group, when one is present
    pub fn name(&self) -> Option<&str> {
        self.name.english()
    }

    /// Display name, falling back to a placeholder for unnamed groups
    pub fn display_name(&self) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => format!("Unknown_{}", self.group_id),
        }
    }
}

/// Group name in either historical schema form
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GroupName {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl GroupName {
    pub fn english(&self) -> Option<&str> {
        match self {
            GroupName::Plain(name) => Some(name),
            GroupName::Localized(names) => names.get("en").map(String::as_str),
        }
    }
}

impl Default for GroupName {
    fn default() -> Self {
        GroupName::Localized(BTreeMap::new())
    }
}
