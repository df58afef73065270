//! Error types for the IssueBridge core library.
//!
//! Each subsystem has its own error type derived with `thiserror`, and a
//! top-level [`CoreError`] enum unifies them all for callers that want a
//! single error type.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for the entire core library.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parse error.
    #[error("configuration parse error: {0}")]
    ParseError(String),

    /// Generic I/O error reading the config file.
    #[error("configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Identity errors
// ---------------------------------------------------------------------------

/// Errors from the identity mapping subsystem.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The mapping file exists but could not be read.
    #[error("identity mapping file error at '{path}': {detail}")]
    MappingFileError {
        path: String,
        detail: String,
    },
}

// ---------------------------------------------------------------------------
// Resource errors
// ---------------------------------------------------------------------------

/// Errors from bundled-resource access.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No bundled resource carries the requested name.
    #[error("embedded resource not found: {name}")]
    NotFound { name: String },
}
