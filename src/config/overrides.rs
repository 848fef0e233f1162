use serde::{Deserialize, Serialize};

use crate::core::HostPattern;

/// Configuration overrides produced by one resolution pass.
///
/// A field is `Some` only when resolution found a non-blank value.
/// Absent fields are omitted from the serialized form entirely, never
/// emitted as empty strings or nulls, so the settings-loading host
/// keeps its own defaults for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideSet {
    /// Anchored patterns validating the request `Host` header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_host_patterns: Option<Vec<HostPattern>>,

    /// Secret strengthening one-time hashes and tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_salt: Option<String>,

    /// Directory where exported configuration is read and written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_sync_directory: Option<String>,
}

impl OverrideSet {
    /// True when no override was resolved at all.
    pub fn is_empty(&self) -> bool {
        self.trusted_host_patterns.is_none()
            && self.hash_salt.is_none()
            && self.config_sync_directory.is_none()
    }
}
