//! Icon records (iconIDs.yaml)

use serde::Deserialize;

/// An icon entry mapping an icon id to an image file
#[derive(Debug, Clone, Deserialize)]
pub struct IconRecord {
    #[serde(skip)]
    pub icon_id: u32,

    /// Resource path as exported, e.g. `res:/ui/texture/icons/27_64_1.png`
    #[serde(rename = "iconFile")]
    pub icon_file: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl IconRecord {
    /// Final path segment of `iconFile`; the only part that exists on disk
    /// inside an unzipped image export
    pub fn file_name(&self) -> &str {
        self.icon_file
            .rsplit('/')
            .next()
            .unwrap_or(self.icon_file.as_str())
    }
}
