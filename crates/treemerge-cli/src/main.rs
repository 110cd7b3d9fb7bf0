//! Treemerge CLI - merge directory trees into text archives and restore
//! them.

mod cli;
mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::Merge(args) => commands::merge::execute(args, &*formatter, cli.json),
        cli::Commands::Extract(args) => commands::extract::execute(args, &*formatter),
        cli::Commands::Restore(args) => commands::restore::execute(args, &*formatter),
        cli::Commands::Completion { shell } => {
            commands::completion::execute(*shell);
            Ok(())
        }
    }
}
