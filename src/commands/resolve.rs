//! Resolve command implementation
//!
//! The full pipeline: group name -> group record -> icon record -> file name,
//! then optionally a disk search under `--images`.

use console::Style;
use std::path::PathBuf;

use crate::cli::ResolveArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::locator::{self, LocateOutcome, MatchKind};
use crate::resolver::{GroupIndex, ResolvedIcon};

/// Run resolve command
pub fn run(
    groups: Option<PathBuf>,
    icons: Option<PathBuf>,
    verbose: bool,
    args: ResolveArgs,
) -> Result<()> {
    let tables = helpers::load_tables(groups, icons, verbose)?;
    let index = GroupIndex::new(&tables);
    let resolved = index.resolve(&args.name)?;

    match args.images {
        Some(images) => {
            let outcome = locator::locate(&images, &resolved.file_name)?;
            if args.unique {
                outcome.expect_unique(&resolved.file_name)?;
            }
            if args.json {
                print_json(&resolved, Some(&outcome))?;
            } else {
                print_resolved(&resolved);
                print_matches(&images, &resolved.file_name, &outcome);
            }
        }
        None => {
            if args.json {
                print_json(&resolved, None)?;
            } else {
                print_resolved(&resolved);
            }
        }
    }

    Ok(())
}

fn print_resolved(resolved: &ResolvedIcon) {
    let bold = Style::new().bold();
    println!(
        "{} (group {}) -> icon {} -> {}",
        bold.apply_to(&resolved.group_name),
        resolved.group_id,
        resolved.icon_id,
        bold.apply_to(&resolved.file_name)
    );
}

fn print_matches(images: &std::path::Path, file_name: &str, outcome: &LocateOutcome) {
    if outcome.is_empty() {
        println!(
            "No file named '{}' under {}",
            file_name,
            helpers::canonical_display(images)
        );
        return;
    }

    let dim = Style::new().dim();
    if let Some(kind) = outcome.kind {
        if kind != MatchKind::Exact {
            println!("{}", dim.apply_to(format!("({} match)", kind.label())));
        }
    }
    for path in &outcome.matches {
        println!("{}", path.display());
    }
}

fn print_json(resolved: &ResolvedIcon, outcome: Option<&LocateOutcome>) -> Result<()> {
    let mut value = serde_json::json!({ "resolved": resolved });
    if let Some(outcome) = outcome {
        let matches: Vec<String> = outcome
            .matches
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        value["matches"] = serde_json::json!(matches);
        value["match_kind"] = serde_json::json!(outcome.kind);
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
