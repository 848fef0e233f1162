//! Core resolution logic for the settings override resolver.
//! Each module implements one independent transformation; none of them
//! can fail, only yield "no value".

mod config_sync;
mod hash_salt;
mod trusted_hosts;

pub use config_sync::resolve_config_sync_directory;
pub use hash_salt::{resolve_hash_salt, FsSecretReader, SecretReader};
pub use trusted_hosts::{resolve_trusted_host_patterns, HostPattern};
