//! Game configuration.
//!
//! Defaults reproduce the standard game: eight columns, fifty undo steps,
//! an unseeded shuffle.
//!
//! # Example
//!
//! ```rust
//! use domino_solitaire::config::GameConfig;
//!
//! let config = GameConfig::builder()
//!     .seed(2024)
//!     .history_capacity(20)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.column_count, 8);
//! assert_eq!(config.seed, Some(2024));
//! ```

pub mod builder;
pub mod error;

pub use builder::GameConfigBuilder;
pub use error::ConfigError;

use crate::core::{DEFAULT_COLUMNS, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};

/// Settings for dealing and playing a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of tableau columns dealt.
    pub column_count: usize,

    /// Undo snapshots kept before the oldest is dropped.
    pub history_capacity: usize,

    /// Fixed shuffle seed; `None` shuffles from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMNS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }
}
