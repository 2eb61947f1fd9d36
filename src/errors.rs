use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for catalog operations.
///
/// Only I/O and configuration problems are errors. A skipped malformed
/// line and a lookup miss are normal outcomes modeled as data
/// (`Option`), never as error variants or sentinel records.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
