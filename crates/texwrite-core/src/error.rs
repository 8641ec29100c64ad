use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TexwriteError {
    // Destination errors
    #[error("IO_OPEN_FAILED: cannot open '{path}' for writing: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // State errors
    #[error("WRITER_CLOSED: document has already been closed")]
    WriterClosed,

    #[error("LIST_CLOSED: list block has already been closed")]
    ListClosed,

    // Config errors
    #[error("CONFIG_READ_FAILED: cannot read '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CONFIG_PARSE_ERROR: failed to parse preamble config: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_SERIALIZE_ERROR: {0}")]
    ConfigSerializeError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },
}

impl TexwriteError {
    /// Whether this error is a caller discipline violation rather than an I/O failure
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, TexwriteError::WriterClosed | TexwriteError::ListClosed)
    }
}

pub type Result<T> = std::result::Result<T, TexwriteError>;
