//! Settings override resolution for Drupal containers.
//! This crate translates environment variables and Docker secret files
//! into an explicit set of configuration overrides consumed by the
//! site's settings loader.
//!
//! The resolver is stateless and infallible: anything that cannot be
//! resolved to a non-blank value is simply left out of the result, so
//! the host's own defaults apply.

pub mod config;
pub mod core;
pub mod utils;

pub use config::{resolve_from_env, resolve_overrides, EnvSnapshot, OverrideSet};
pub use core::{FsSecretReader, HostPattern, SecretReader};
pub use utils::{init_logging, SecretError, SecretResult};
