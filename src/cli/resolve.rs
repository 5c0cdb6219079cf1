use clap::Parser;
use std::path::PathBuf;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve a group name to its icon file name:\n    iconseek resolve \"Manufacture & Research\"\n\n\
                  Also locate the file inside an unzipped image export:\n    iconseek resolve \"Manufacture & Research\" --images ./Icons\n\n\
                  Fail when the filename is duplicated across subdirectories:\n    iconseek resolve Minerals --images ./Icons --unique")]
pub struct ResolveArgs {
    /// Market group name (exact match wins over case-insensitive)
    pub name: String,

    /// Image export directory to search for the resolved file
    #[arg(long, value_name = "DIR")]
    pub images: Option<PathBuf>,

    /// Fail when more than one match exists on disk
    #[arg(long, requires = "images")]
    pub unique: bool,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}
