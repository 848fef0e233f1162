//! Utility modules for the settings override resolver.
//! This module contains common utilities used across the crate.

mod error;
mod logging;

pub use error::{SecretError, SecretResult};
pub use logging::init_logging;
