// Core modules
pub mod config;
pub mod demo;
pub mod document;
pub mod error;
pub mod list;
pub mod template;
pub mod title;

// Re-export commonly used types
pub use config::PreambleConfig;
pub use document::{DocumentWriter, write_document};
pub use error::{Result, TexwriteError};
pub use list::ListBlock;
pub use template::latex_header;
pub use title::{DateSpec, Title};
