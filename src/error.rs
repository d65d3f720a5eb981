//! Error types for runstat
//!
//! The core pipeline is tolerant by design: malformed blocks and empty
//! sources are absorbed, never surfaced. The variants here cover the only
//! real fault paths: caller configuration and I/O at the source boundary.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Runstat error types
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-supplied field pattern failed to compile
    #[error("Invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Experiment pair references a label with no registered source
    #[error("Unknown source label: {0}\nEvery pair must reference a label present in the summarized catalog")]
    UnknownLabel(String),

    /// IO error reading a file-backed log source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
