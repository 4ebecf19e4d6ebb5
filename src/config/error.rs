//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when building a [`GameConfig`](super::GameConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Column count must be between 1 and {max}, got {found}")]
    InvalidColumnCount { found: usize, max: usize },

    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,
}
