//! Static Data Export table loading
//!
//! Both input files share the same outer shape: a YAML mapping from integer
//! id to a record body. Duplicate ids are a resolvable ambiguity in hand-fed
//! exports, so parsing is last-write-wins rather than an error; serde_yaml's
//! default map decoding rejects duplicates, hence the custom visitor.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{self, Result};

pub mod groups;
pub mod icons;

pub use groups::GroupRecord;
pub use icons::IconRecord;

/// Both lookup tables, loaded as read-only snapshots for one invocation
#[derive(Debug)]
pub struct SdeTables {
    pub groups: HashMap<u32, GroupRecord>,
    pub icons: HashMap<u32, IconRecord>,
}

impl SdeTables {
    /// Load the group and icon tables from their YAML files
    pub fn load(groups_path: &Path, icons_path: &Path) -> Result<Self> {
        let mut groups: HashMap<u32, GroupRecord> = load_table(groups_path)?;
        for (id, record) in groups.iter_mut() {
            record.group_id = *id;
        }

        let mut icons: HashMap<u32, IconRecord> = load_table(icons_path)?;
        for (id, record) in icons.iter_mut() {
            record.icon_id = *id;
        }

        Ok(Self { groups, icons })
    }
}

/// Read one id-keyed table from disk
fn load_table<R: DeserializeOwned>(path: &Path) -> Result<HashMap<u32, R>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| error::file_read(path.display().to_string(), e.to_string()))?;

    // An empty export file is an empty table, not a parse failure
    if text.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let table: Table<R> = serde_yaml::from_str(&text)
        .map_err(|e| error::parse_failed(path.display().to_string(), e.to_string()))?;
    Ok(table.0)
}

/// Id-keyed table wrapper with duplicate-tolerant map decoding
struct Table<R>(HashMap<u32, R>);

impl<'de, R: Deserialize<'de>> Deserialize<'de> for Table<R> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor<R>(PhantomData<R>);

        impl<'de, R: Deserialize<'de>> Visitor<'de> for TableVisitor<R> {
            type Value = Table<R>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of integer ids to records")
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut table = HashMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, record)) = map.next_entry::<u32, R>()? {
                    // last-write-wins on duplicate ids
                    table.insert(id, record);
                }
                Ok(Table(table))
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}
