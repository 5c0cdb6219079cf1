//! Locate command implementation
//!
//! The bare filename search, without the group/icon join.

use console::Style;

use crate::cli::LocateArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::locator::{self, MatchKind};

/// Run locate command
pub fn run(verbose: bool, args: LocateArgs) -> Result<()> {
    if verbose {
        eprintln!(
            "Searching for '{}' under {}",
            args.name,
            helpers::canonical_display(&args.images)
        );
    }

    let outcome = locator::locate(&args.images, &args.name)?;

    if args.json {
        let matches: Vec<String> = outcome
            .matches
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        let value = serde_json::json!({
            "name": args.name,
            "match_kind": outcome.kind,
            "matches": matches,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if outcome.is_empty() {
        println!(
            "No file named '{}' under {}",
            args.name,
            helpers::canonical_display(&args.images)
        );
        return Ok(());
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

    Ok(())
}
