//! Saving and restoring games.
//!
//! A [`Snapshot`] is the persisted form of a [`GameState`]: everything but
//! the undo history. Storage itself belongs to the host; this module only
//! encodes, decodes and validates.
//!
//! Restoring never fails from the player's point of view:
//! [`restore_or_deal`] falls back to a fresh deal when saved data is
//! absent, malformed or invalid.

use crate::config::GameConfig;
use crate::core::{Chain, Domino, GameState, History, Pair, Tableau};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;
pub mod validate;

pub use error::SnapshotError;
pub use validate::SnapshotIssue;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a game in progress.
/// Does NOT include undo history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    pub tableau: Tableau,
    pub pairs: Vec<Pair>,
    pub dominos: Vec<Domino>,
    pub chains: Vec<Chain>,
    pub move_count: u32,
}

impl Snapshot {
    /// Capture a game, leaving its history behind.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            saved_at: Utc::now(),
            tableau: state.tableau.clone(),
            pairs: state.pairs.clone(),
            dominos: state.dominos.clone(),
            chains: state.chains.clone(),
            move_count: state.move_count,
        }
    }

    /// Human-readable JSON encoding.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Validate and rebuild a playable state with an empty history.
    pub fn into_state(self, config: &GameConfig) -> Result<GameState, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if let Validation::Failure(issues) = self.validate(config) {
            let reasons: Vec<String> = issues.iter().map(ToString::to_string).collect();
            return Err(SnapshotError::ValidationFailed(reasons.join("; ")));
        }

        Ok(GameState {
            tableau: self.tableau,
            pairs: self.pairs,
            dominos: self.dominos,
            chains: self.chains,
            move_count: self.move_count,
            history: History::new(config.history_capacity),
        })
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(self)
    }
}

/// Resume a saved game, or deal a new one if the saved JSON is absent or
/// unusable.
///
/// # Example
///
/// ```rust
/// use domino_solitaire::config::GameConfig;
/// use domino_solitaire::core::GameState;
/// use domino_solitaire::snapshot::restore_or_deal;
///
/// let config = GameConfig::default();
/// let game = GameState::new_game(&config).move_card(0, 1);
/// let saved = game.snapshot().to_json().unwrap();
///
/// let restored = restore_or_deal(Some(&saved), &config);
/// assert_eq!(restored.tableau, game.tableau);
/// assert!(restored.history.is_empty());
///
/// let fallback = restore_or_deal(Some("{not json"), &config);
/// assert_eq!(fallback.move_count, 0);
/// ```
pub fn restore_or_deal(saved: Option<&str>, config: &GameConfig) -> GameState {
    let Some(json) = saved else {
        return GameState::new_game(config);
    };

    match Snapshot::from_json(json).and_then(|snapshot| snapshot.into_state(config)) {
        Ok(state) => {
            debug!(moves = state.move_count, "Restored saved game");
            state
        }
        Err(err) => {
            warn!(error = %err, "Discarding saved game, dealing a new one");
            GameState::new_game(config)
        }
    }
}
