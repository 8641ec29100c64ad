//! Preamble configuration loaded from TOML

mod model;

pub use model::{DocumentClassConfig, PackageConfig, PreambleConfig};
