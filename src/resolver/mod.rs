//! Group name to icon file resolution
//!
//! Two chained lookups: group name -> group record (for its `iconID`), then
//! icon id -> icon record (for its `iconFile`). Each miss has its own error
//! variant so the caller can tell which stage failed.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{IconseekError, Result};
use crate::sde::{GroupRecord, SdeTables};

/// Successful resolution of a group name down to an on-disk file name
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedIcon {
    pub group_id: u32,
    pub group_name: String,
    pub icon_id: u32,
    /// Raw `iconFile` value from the icon table
    pub icon_file: String,
    /// Basename used for the disk search
    pub file_name: String,
}

/// Name index over a loaded group table
///
/// An exact (case-sensitive) name match wins over a case-insensitive one.
/// Where several groups share a name, the lowest group id wins, so repeated
/// runs are deterministic.
pub struct GroupIndex<'a> {
    tables: &'a SdeTables,
    by_name: HashMap<&'a str, u32>,
    by_name_lower: HashMap<String, u32>,
}

impl<'a> GroupIndex<'a> {
    pub fn new(tables: &'a SdeTables) -> Self {
        let mut ids: Vec<u32> = tables.groups.keys().copied().collect();
        ids.sort_unstable();

        let mut by_name = HashMap::new();
        let mut by_name_lower = HashMap::new();
        for id in ids {
            if let Some(name) = tables.groups[&id].name() {
                by_name.entry(name).or_insert(id);
                by_name_lower.entry(name.to_lowercase()).or_insert(id);
            }
        }

        Self {
            tables,
            by_name,
            by_name_lower,
        }
    }

    /// Look up a group by name, exact match first
    pub fn find_group(&self, name: &str) -> Option<&'a GroupRecord> {
        let id = self
            .by_name
            .get(name)
            .or_else(|| self.by_name_lower.get(&name.to_lowercase()))?;
        self.tables.groups.get(id)
    }

    /// Resolve a group name to its icon file
    pub fn resolve(&self, name: &str) -> Result<ResolvedIcon> {
        let group = self
            .find_group(name)
            .ok_or_else(|| IconseekError::GroupNotFound {
                name: name.to_string(),
            })?;

        let icon_id = group
            .icon_id
            .ok_or_else(|| IconseekError::NoIconAssigned {
                name: group.display_name(),
                group_id: group.group_id,
            })?;

        let icon = self
            .tables
            .icons
            .get(&icon_id)
            .ok_or_else(|| IconseekError::IconRecordMissing {
                icon_id,
                name: group.display_name(),
            })?;

        Ok(ResolvedIcon {
            group_id: group.group_id,
            group_name: group.display_name(),
            icon_id,
            icon_file: icon.icon_file.clone(),
            file_name: icon.file_name().to_string(),
        })
    }

    /// Ancestry of a group, root first and ending with the group itself
    ///
    /// Stops on a dangling `parentGroupID` or a cycle.
    pub fn ancestry(&self, group_id: u32) -> Vec<&'a GroupRecord> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = Some(group_id);

        while let Some(id) = cursor {
            if !seen.insert(id) {
                break;
            }
            match self.tables.groups.get(&id) {
                Some(record) => {
                    chain.push(record);
                    cursor = record.parent_group_id;
                }
                None => break,
            }
        }

        chain.reverse();
        chain
    }
}
