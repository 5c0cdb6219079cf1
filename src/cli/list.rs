use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every group:\n    iconseek list\n\n\
                  Filter by substring (case-insensitive):\n    iconseek list research\n\n\
                  Machine-readable output:\n    iconseek list research --json")]
pub struct ListArgs {
    /// Substring to filter group names by (case-insensitive)
    pub pattern: Option<String>,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}
