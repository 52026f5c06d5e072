//! Error types for conditions outside the check itself.
//!
//! A registry that is out of order is not an error; it is reported through
//! `CheckResult`. The variants here describe a broken environment: the
//! registry file is missing, unreadable, or not a YAML mapping.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the registry.
#[derive(Debug, Error)]
pub enum Error {
    /// The registry file could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not valid YAML.
    #[error("failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed, but its top level is not a mapping.
    #[error("'{}' must contain a mapping of usernames, found {found}", .path.display())]
    NotAMapping { path: PathBuf, found: &'static str },

    /// A top-level key cannot be used as a username.
    #[error("'{}' has a top-level key that is not a username: {key}", .path.display())]
    UnsupportedKey { path: PathBuf, key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
