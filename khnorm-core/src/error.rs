//! Error types for input handling
//!
//! The canonicalization itself is total and infallible; errors only arise
//! while acquiring text from files, readers, or raw bytes.

use thiserror::Error;

/// Errors produced while acquiring input text
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading a file or stream
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type for normalization operations
pub type Result<T> = std::result::Result<T, Error>;
