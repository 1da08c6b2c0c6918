//! FoodGuard CLI - structure AI food adulteration analyses.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            file,
            json,
            strategy,
        } => commands::classify::run(file, json, strategy.into(), cli.verbose),

        Commands::Inspect { file, status, json } => {
            commands::inspect::run(file, status, json, cli.verbose)
        }

        Commands::Barcode { code } => commands::barcode::run(&code, cli.verbose),

        Commands::Serve { port, strategy } => {
            commands::serve::run(port, strategy.into(), cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
