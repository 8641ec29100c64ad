pub mod demo;
pub mod preamble;

use anyhow::{Context as _, Result};
use std::path::Path;
use texwrite_core::PreambleConfig;

/// Load the preamble config at `path`, or the built-in preamble if none is given
pub(crate) fn load_preamble(path: Option<&Path>) -> Result<PreambleConfig> {
    match path {
        Some(path) => PreambleConfig::from_file(path)
            .with_context(|| format!("Failed to load preamble config {}", path.display())),
        None => Ok(PreambleConfig::default()),
    }
}
