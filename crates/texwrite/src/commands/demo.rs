//! Demo command - write the sample document

use super::load_preamble;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use texwrite_core::demo::{DemoOptions, write_demo};

/// Write the sample document to `output`
///
/// # Arguments
///
/// * `output` - Destination file, created or truncated
/// * `items` - Items in the outer list
/// * `inner_items` - Items in each nested list
/// * `config` - Optional preamble config file
/// * `verbose` - Enable verbose output if true
pub fn run(
    output: PathBuf,
    items: usize,
    inner_items: usize,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let preamble = load_preamble(config.as_deref())?;

    if verbose {
        println!("{} Writing {}", "→".cyan(), output.display());
    }

    let options = DemoOptions {
        items,
        inner_items,
        preamble,
    };
    write_demo(&output, &options)?;

    println!("{} Wrote {}", "✓".green().bold(), output.display());
    Ok(())
}
