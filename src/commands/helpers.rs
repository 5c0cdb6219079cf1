//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{IconseekError, Result};
use crate::sde::SdeTables;

/// Require a data file path that may come from a flag or its env fallback
pub fn require_path(path: Option<PathBuf>, flag: &str) -> Result<PathBuf> {
    path.ok_or_else(|| IconseekError::MissingPath {
        flag: flag.to_string(),
    })
}

/// Load both lookup tables from the CLI-supplied paths
pub fn load_tables(
    groups: Option<PathBuf>,
    icons: Option<PathBuf>,
    verbose: bool,
) -> Result<SdeTables> {
    let groups_path = require_path(groups, "--groups")?;
    let icons_path = require_path(icons, "--icons")?;

    let tables = SdeTables::load(&groups_path, &icons_path)?;
    if verbose {
        eprintln!(
            "Loaded {} groups from {} and {} icons from {}",
            tables.groups.len(),
            groups_path.display(),
            tables.icons.len(),
            icons_path.display()
        );
    }
    Ok(tables)
}

/// Display-friendly canonical form of a user-supplied path
pub fn canonical_display(path: &Path) -> String {
    dunce::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
