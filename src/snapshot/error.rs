//! Errors from saving and restoring games.

use thiserror::Error;

/// Why a game could not be saved or a saved game could not be restored.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The game could not be encoded for the host to store
    #[error("Could not encode game: {0}")]
    SerializationFailed(String),

    /// Saved data is not a snapshot at all
    #[error("Could not decode saved game: {0}")]
    DeserializationFailed(String),

    /// Saved by a format this build cannot read
    #[error("Saved game uses format version {found}, this build reads {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded, but the cards, dominos or chains are not a legal position
    #[error("Saved game is not a legal position: {0}")]
    ValidationFailed(String),
}
