use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for secret file access
///
/// These never escape the resolver's public API: a failed secret read
/// degrades to "no value from this path" and resolution moves on.
#[derive(Error, Debug)]
pub enum SecretError {
    /// The secret file does not exist
    #[error("Secret file not found: {0}")]
    NotFound(PathBuf),

    /// The secret file exists but could not be read
    #[error("Secret file unreadable: {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for secret read operations
pub type SecretResult<T> = Result<T, SecretError>;
