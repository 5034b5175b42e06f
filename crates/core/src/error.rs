//! Error types for deck generation and read-back.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, writing or reading a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create, write or read a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A table grid could not be laid out.
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// Invalid or corrupted package.
    #[error("Invalid or corrupted file: {0}")]
    CorruptedFile(String),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML serialization or parsing error.
    #[error("XML error: {0}")]
    XmlError(String),
}
