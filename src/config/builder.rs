//! Builder API for game configuration.

use crate::config::error::ConfigError;
use crate::config::GameConfig;
use crate::core::{DECK_SIZE, DEFAULT_COLUMNS, DEFAULT_HISTORY_CAPACITY};

/// Builder for [`GameConfig`]; unset fields take the standard defaults.
pub struct GameConfigBuilder {
    column_count: usize,
    history_capacity: usize,
    seed: Option<u64>,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self {
            column_count: DEFAULT_COLUMNS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            seed: None,
        }
    }

    /// Set the number of tableau columns
    pub fn column_count(mut self, count: usize) -> Self {
        self.column_count = count;
        self
    }

    /// Set how many moves can be undone
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Fix the shuffle seed for a reproducible deal
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the configuration.
    /// Returns an error if a field is out of range.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        if self.column_count == 0 || self.column_count > DECK_SIZE {
            return Err(ConfigError::InvalidColumnCount {
                found: self.column_count,
                max: DECK_SIZE,
            });
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }

        Ok(GameConfig {
            column_count: self.column_count,
            history_capacity: self.history_capacity,
            seed: self.seed,
        })
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default_config() {
        let config = GameConfigBuilder::new().build().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn builder_sets_every_field() {
        let config = GameConfig::builder()
            .column_count(6)
            .history_capacity(10)
            .seed(99)
            .build()
            .unwrap();

        assert_eq!(config.column_count, 6);
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn builder_rejects_zero_columns() {
        let result = GameConfig::builder().column_count(0).build();
        assert_eq!(
            result,
            Err(ConfigError::InvalidColumnCount { found: 0, max: 52 })
        );
    }

    #[test]
    fn builder_rejects_more_columns_than_cards() {
        let result = GameConfig::builder().column_count(53).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidColumnCount { found: 53, .. })
        ));
    }

    #[test]
    fn builder_rejects_zero_history() {
        let result = GameConfig::builder().history_capacity(0).build();
        assert_eq!(result, Err(ConfigError::ZeroHistoryCapacity));
    }

    #[test]
    fn config_serializes_correctly() {
        let config = GameConfig::builder().seed(5).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
