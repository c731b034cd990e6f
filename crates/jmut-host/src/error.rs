//! Host-side configuration errors.

use jmut_core::OptionError;

/// Anything that stops a mutator from being configured.
///
/// Option problems found by the core validator are re-raised here so callers
/// only ever deal with one error type at the configuration boundary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid entry options: {0}")]
    Option(#[from] OptionError),

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
