//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use texwrite_core::demo::DEFAULT_OUTPUT;

#[derive(Parser)]
#[command(name = "texwrite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample document with a title and nested lists
    Demo {
        /// Output file
        #[arg(default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Number of items in the outer list
        #[arg(long, default_value_t = 10)]
        items: usize,

        /// Number of items in each nested list
        #[arg(long, default_value_t = 4)]
        inner_items: usize,

        /// Preamble config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the document preamble
    Preamble {
        /// Preamble config file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
