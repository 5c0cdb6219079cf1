//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - locate: Locate command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod locate;
pub mod resolve;
pub mod show;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use locate::LocateArgs;
pub use resolve::ResolveArgs;
pub use show::ShowArgs;

/// iconseek - SDE market group icon resolver
///
/// Cross-references a game's static data export: market group names, icon ids,
/// and the unzipped image archive.
#[derive(Parser, Debug)]
#[command(
    name = "iconseek",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve static-data-export market group names to icon image files",
    long_about = "iconseek joins a market-group definition file (marketGroups.yaml) against an \
                  icon-id lookup file (iconIDs.yaml), then finds the resolved image inside an \
                  unzipped icon export directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  iconseek resolve \"Manufacture & Research\"     \x1b[90m# Group name to icon file name\x1b[0m\n   \
                  iconseek resolve Minerals --images ./Icons    \x1b[90m# Also find the file on disk\x1b[0m\n   \
                  iconseek locate 27_64_1.png --images ./Icons  \x1b[90m# Bare filename search\x1b[0m\n   \
                  iconseek list research                        \x1b[90m# Find the exact group name\x1b[0m\n   \
                  iconseek show \"Manufacture & Research\"        \x1b[90m# Full record with parent chain\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Path to the market group definition file (marketGroups.yaml)
    #[arg(long, short = 'g', global = true, value_name = "FILE", env = "ICONSEEK_GROUPS")]
    pub groups: Option<PathBuf>,

    /// Path to the icon id lookup file (iconIDs.yaml)
    #[arg(long, short = 'i', global = true, value_name = "FILE", env = "ICONSEEK_ICONS")]
    pub icons: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a group name to its icon file, optionally locating it on disk
    Resolve(ResolveArgs),

    /// Search an image directory for a file name
    Locate(LocateArgs),

    /// List group names, optionally filtered by a substring
    List(ListArgs),

    /// Show a group record in full, including its parent chain
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
