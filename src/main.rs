//! iconseek - SDE market group icon resolver
//!
//! Joins a market-group definition file against an icon-id lookup file, then
//! finds the resolved image inside an unzipped icon export directory.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod locator;
mod resolver;
mod sde;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(cli.groups, cli.icons, cli.verbose, args),
        Commands::Locate(args) => commands::locate::run(cli.verbose, args),
        Commands::List(args) => commands::list::run(cli.groups, cli.icons, cli.verbose, args),
        Commands::Show(args) => commands::show::run(cli.groups, cli.icons, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
