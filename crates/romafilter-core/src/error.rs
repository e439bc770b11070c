//! Error types for the ambient surfaces (config loading, JSON bridge).
//!
//! Matching itself never fails: a matcher either finds ranges or reports
//! absence.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Unknown strategy name
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
}

/// Result type alias using the crate Error.
pub type Result<T> = std::result::Result<T, Error>;
