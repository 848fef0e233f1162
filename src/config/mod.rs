//! Configuration override resolution.
//! This module assembles the three independent resolutions into one
//! override set handed to the settings-loading host.

mod overrides;
mod snapshot;

pub use overrides::OverrideSet;
pub use snapshot::{
    EnvSnapshot, CONFIG_SYNC_DIR_VAR, DEFAULT_SECRET_PATHS, HASH_SALT_VAR, TRUSTED_HOSTS_VAR,
};

use std::path::PathBuf;

use tracing::debug;

use crate::core::{
    resolve_config_sync_directory, resolve_hash_salt, resolve_trusted_host_patterns,
    FsSecretReader, SecretReader,
};

/// Resolve all overrides from a snapshot and a secret read capability.
///
/// The three fields are fully independent; none short-circuits
/// another. The call is infallible and idempotent: anything that
/// cannot be resolved to a non-blank value is left out of the result.
pub fn resolve_overrides(
    snapshot: &EnvSnapshot,
    secret_paths: &[PathBuf],
    reader: &dyn SecretReader,
) -> OverrideSet {
    let patterns = resolve_trusted_host_patterns(snapshot.trusted_hosts.as_deref());
    let trusted_host_patterns = if patterns.is_empty() {
        None
    } else {
        Some(patterns)
    };

    let hash_salt = resolve_hash_salt(snapshot.hash_salt.as_deref(), secret_paths, reader);

    let config_sync_directory = resolve_config_sync_directory(snapshot.config_sync_dir.as_deref());

    let overrides = OverrideSet {
        trusted_host_patterns,
        hash_salt,
        config_sync_directory,
    };

    debug!(
        trusted_host_patterns = overrides.trusted_host_patterns.as_ref().map_or(0, Vec::len),
        hash_salt_present = overrides.hash_salt.is_some(),
        config_sync_directory_present = overrides.config_sync_directory.is_some(),
        "Resolved settings overrides"
    );

    overrides
}

/// Resolve overrides from the process environment and the default
/// Docker secret locations.
pub fn resolve_from_env() -> OverrideSet {
    let snapshot = EnvSnapshot::from_env();
    resolve_overrides(
        &snapshot,
        &EnvSnapshot::default_secret_paths(),
        &FsSecretReader,
    )
}
