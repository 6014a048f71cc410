//! Error types for the zipmode crate.

use thiserror::Error;

/// Errors that can occur while scanning a ZIP central directory.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the underlying byte source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// End of archive reached while reading a fixed-size field.
    #[error("unexpected end of archive: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Could not find the end of central directory record.
    #[error("could not find end of central directory record")]
    EocdNotFound,

    /// A central directory entry declared a file name longer than the bytes
    /// remaining in the archive.
    #[error("could not read file name (length {length}) in central directory record")]
    TruncatedFileName { length: usize },

    /// The archive uses Zip64 records, which this crate does not parse.
    #[error("Zip64 format not supported")]
    Zip64Unsupported,
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, Error>;
