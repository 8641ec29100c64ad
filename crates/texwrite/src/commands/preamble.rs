//! Preamble command - print the preamble without writing a file

use super::load_preamble;
use crate::output::print_raw;
use anyhow::Result;
use std::path::PathBuf;
use texwrite_core::latex_header;

pub fn run(config: Option<PathBuf>) -> Result<()> {
    match config {
        Some(path) => print_raw(&load_preamble(Some(&path))?.render())?,
        None => print_raw(latex_header())?,
    }
    Ok(())
}
