use clap::Parser;
use std::path::PathBuf;

/// Arguments for the locate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Find a file by exact name:\n    iconseek locate 27_64_1.png --images ./Icons\n\n\
                  Substring search (used when nothing matches exactly):\n    iconseek locate 27_64 --images ./Icons")]
pub struct LocateArgs {
    /// File name to search for
    pub name: String,

    /// Image export directory to search
    #[arg(long, value_name = "DIR")]
    pub images: PathBuf,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}
