mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::Level;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr so `preamble` output stays clean
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Demo {
            output,
            items,
            inner_items,
            config,
        } => commands::demo::run(output, items, inner_items, config, cli.verbose),
        Commands::Preamble { config } => commands::preamble::run(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
