use anyhow::Result;
use clap::Parser;

mod cli_bin;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::List(args) => commands::list_command(args),
        Commands::Show(args) => commands::show_command(args),
        Commands::Get(args) => commands::get_command(args),
        Commands::Glob(args) => commands::glob_command(args),
    }
}
