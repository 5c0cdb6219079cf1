//! Filename search over an unzipped image export
//!
//! Matching is tiered: exact case-sensitive beats case-insensitive beats
//! substring. All hits in the best non-empty tier are returned, relative to
//! the scan root; duplicate filenames across subdirectories are a normal
//! multi-hit result. An empty result is not an error.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{IconseekError, Result};

/// Match tier a locate result was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    Exact,
    CaseInsensitive,
    Substring,
}

impl MatchKind {
    pub fn label(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::CaseInsensitive => "case-insensitive",
            MatchKind::Substring => "substring",
        }
    }
}

/// Result of a locate run: the winning tier and its matches
#[derive(Debug)]
pub struct LocateOutcome {
    pub kind: Option<MatchKind>,
    pub matches: Vec<PathBuf>,
}

impl LocateOutcome {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The single match, `None` when empty, `AmbiguousMatch` when several exist
    pub fn expect_unique(&self, name: &str) -> Result<Option<&Path>> {
        match self.matches.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(single)),
            many => Err(IconseekError::AmbiguousMatch {
                name: name.to_string(),
                candidates: many
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Search `root` recursively for files named `file_name`
pub fn locate(root: &Path, file_name: &str) -> Result<LocateOutcome> {
    if !root.is_dir() {
        return Err(IconseekError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let needle_lower = file_name.to_lowercase();
    let mut exact = Vec::new();
    let mut case_insensitive = Vec::new();
    let mut substring = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(candidate) = entry.file_name().to_str() else {
            continue;
        };
        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();

        if candidate == file_name {
            exact.push(relative);
        } else if candidate.to_lowercase() == needle_lower {
            case_insensitive.push(relative);
        } else if candidate.to_lowercase().contains(&needle_lower) {
            substring.push(relative);
        }
    }

    let (kind, mut matches) = if !exact.is_empty() {
        (Some(MatchKind::Exact), exact)
    } else if !case_insensitive.is_empty() {
        (Some(MatchKind::CaseInsensitive), case_insensitive)
    } else if !substring.is_empty() {
        (Some(MatchKind::Substring), substring)
    } else {
        (None, Vec::new())
    };

    matches.sort();
    Ok(LocateOutcome { kind, matches })
}
