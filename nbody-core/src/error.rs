use crate::config::ConfigError;
use thiserror::Error;

/// Errors reported before any simulation state is touched
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("invalid body: {0}")]
    InvalidBody(String),
}
