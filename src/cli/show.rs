use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a group record with its parent chain:\n    iconseek show \"Manufacture & Research\"\n\n\
                  Machine-readable output:\n    iconseek show Minerals --json")]
pub struct ShowArgs {
    /// Market group name (exact match wins over case-insensitive)
    pub name: String,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}
