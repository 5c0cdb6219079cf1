//! Show command implementation
//!
//! Prints one group record in full: ids, icon assignment, and the parent
//! chain walked root-first over `parentGroupID`.

use console::Style;
use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::commands::helpers;
use crate::error::{IconseekError, Result};
use crate::resolver::GroupIndex;

/// Run show command
pub fn run(
    groups: Option<PathBuf>,
    icons: Option<PathBuf>,
    verbose: bool,
    args: ShowArgs,
) -> Result<()> {
    let tables = helpers::load_tables(groups, icons, verbose)?;
    let index = GroupIndex::new(&tables);

    let group = index
        .find_group(&args.name)
        .ok_or_else(|| IconseekError::GroupNotFound {
            name: args.name.clone(),
        })?;

    let chain: Vec<String> = index
        .ancestry(group.group_id)
        .iter()
        .map(|g| g.display_name())
        .collect();

    let icon = group.icon_id.and_then(|id| tables.icons.get(&id));

    if args.json {
        let value = serde_json::json!({
            "groupID": group.group_id,
            "name": group.name(),
            "parentGroupID": group.parent_group_id,
            "hasTypes": group.has_types,
            "path": chain,
            "iconID": group.icon_id,
            "iconFile": icon.map(|i| i.icon_file.as_str()),
            "fileName": icon.map(|i| i.file_name()),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!("{}", bold.apply_to(group.display_name()));
    println!("  Group id:   {}", group.group_id);
    println!("  Path:       {}", chain.join(" > "));
    println!("  Has types:  {}", group.has_types);
    match (group.icon_id, icon) {
        (None, _) => println!("  Icon:       {}", dim.apply_to("no icon assigned")),
        (Some(icon_id), None) => println!(
            "  Icon:       {} {}",
            icon_id,
            dim.apply_to("(icon record missing)")
        ),
        (Some(icon_id), Some(icon)) => {
            println!("  Icon:       {} -> {}", icon_id, icon.icon_file);
            println!("  File name:  {}", icon.file_name());
            if let Some(description) = &icon.description {
                println!("  Described:  {}", description);
            }
        }
    }

    Ok(())
}
