use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::utils::{SecretError, SecretResult};

/// Read capability for mounted secret files.
///
/// The trait seam lets hash salt resolution run against a fake in
/// tests instead of the real filesystem.
#[cfg_attr(test, mockall::automock)]
pub trait SecretReader {
    /// Read the full contents of a secret file.
    fn read_secret(&self, path: &Path) -> SecretResult<String>;
}

/// Secret reader backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSecretReader;

impl SecretReader for FsSecretReader {
    fn read_secret(&self, path: &Path) -> SecretResult<String> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SecretError::NotFound(path.to_path_buf())
            } else {
                SecretError::Unreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })
    }
}

/// Resolve the hash salt from the environment value, falling back to
/// each secret path in order.
///
/// A non-blank trimmed environment value wins outright and no secret
/// file is read. Otherwise the first secret file whose trimmed
/// contents are non-blank wins and later candidates are not touched.
/// A missing or unreadable file counts as "no value from this path".
pub fn resolve_hash_salt(
    env_value: Option<&str>,
    secret_paths: &[PathBuf],
    reader: &dyn SecretReader,
) -> Option<String> {
    if let Some(value) = env_value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
    }

    for path in secret_paths {
        match reader.read_secret(path) {
            Ok(content) => {
                let trimmed = content.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                debug!(path = %path.display(), "secret file is blank, trying next candidate");
            }
            Err(e) => {
                debug!(path = %path.display(), %e, "secret file yielded no value");
            }
        }
    }

    None
}
