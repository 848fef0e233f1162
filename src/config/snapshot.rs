use std::env;
use std::path::PathBuf;

/// Environment variable holding the comma-separated trusted host list
pub const TRUSTED_HOSTS_VAR: &str = "DRUPAL_TRUSTED_HOSTS";

/// Environment variable holding the literal hash salt
pub const HASH_SALT_VAR: &str = "DRUPAL_HASH_SALT";

/// Environment variable holding the configuration sync directory path
pub const CONFIG_SYNC_DIR_VAR: &str = "DRUPAL_CONFIG_SYNC_DIR";

/// Docker secret files consulted for the hash salt, in fallback order
pub const DEFAULT_SECRET_PATHS: [&str; 2] =
    ["/run/secrets/drupal_hash_salt", "/run/secrets/hash_salt"];

/// Point-in-time capture of the environment variables the resolver
/// consumes.
///
/// Resolution never reads the process environment directly; hosts and
/// tests construct a snapshot explicitly, or capture one with
/// [`EnvSnapshot::from_env`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Comma-separated hostname list, `*` wildcards allowed
    pub trusted_hosts: Option<String>,
    /// Literal hash salt value
    pub hash_salt: Option<String>,
    /// Path to the configuration sync directory
    pub config_sync_dir: Option<String>,
}

impl EnvSnapshot {
    /// Capture the relevant variables from the process environment.
    /// A variable that is unset or not valid UTF-8 is recorded as
    /// absent.
    pub fn from_env() -> Self {
        Self {
            trusted_hosts: env::var(TRUSTED_HOSTS_VAR).ok(),
            hash_salt: env::var(HASH_SALT_VAR).ok(),
            config_sync_dir: env::var(CONFIG_SYNC_DIR_VAR).ok(),
        }
    }

    /// Default secret file locations mounted by the container runtime.
    pub fn default_secret_paths() -> Vec<PathBuf> {
        DEFAULT_SECRET_PATHS.iter().map(PathBuf::from).collect()
    }
}
