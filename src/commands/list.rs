//! List command implementation
//!
//! Lists group names so users can discover the exact spelling to resolve.

use console::Style;
use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::sde::GroupRecord;

/// Run list command
pub fn run(
    groups: Option<PathBuf>,
    icons: Option<PathBuf>,
    verbose: bool,
    args: ListArgs,
) -> Result<()> {
    let tables = helpers::load_tables(groups, icons, verbose)?;

    let mut rows: Vec<&GroupRecord> = tables.groups.values().collect();
    rows.sort_by_key(|g| g.group_id);

    let needle = args.pattern.as_deref().map(str::to_lowercase);
    let rows: Vec<&GroupRecord> = rows
        .into_iter()
        .filter(|g| match &needle {
            Some(needle) => g
                .name()
                .is_some_and(|name| name.to_lowercase().contains(needle)),
            None => true,
        })
        .collect();

    if args.json {
        let items: Vec<serde_json::Value> = rows
            .iter()
            .map(|g| {
                serde_json::json!({
                    "groupID": g.group_id,
                    "name": g.name(),
                    "parentGroupID": g.parent_group_id,
                    "iconID": g.icon_id,
                    "hasTypes": g.has_types,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No matching groups.");
        return Ok(());
    }

    println!("Market groups ({}):", rows.len());
    let dim = Style::new().dim();
    for group in rows {
        let marker = if group.icon_id.is_none() {
            format!("  {}", dim.apply_to("(no icon)"))
        } else {
            String::new()
        };
        println!("{:>8}  {}{}", group.group_id, group.display_name(), marker);
    }

    Ok(())
}
