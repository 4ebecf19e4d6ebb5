//! Domino Solitaire: a pure functional rules engine for a chain-building solitaire
//!
//! Cards are dealt into eight tableau columns. The player moves cards between
//! columns, pairs red and black cards whose values sum to 14, combines two
//! pairs covering all four suits into a domino, and links dominos into chains
//! by matching labels. The game is won when all thirteen dominos form a single
//! closed loop.
//!
//! The rules live in a pure core: every operation borrows a [`GameState`]
//! and returns a new one. Invalid operations return an unchanged copy, so a
//! host UI can call them speculatively from gesture handlers.
//!
//! # Core Concepts
//!
//! - **GameState**: Immutable aggregate of tableau, pairs, dominos and chains
//! - **Transitions**: `op` returns the next state; `try_op` also explains refusals
//! - **History**: Bounded undo stack carried inside the state
//! - **Snapshot**: Serializable form for hosts that persist games
//!
//! # Example
//!
//! ```rust
//! use domino_solitaire::config::GameConfig;
//! use domino_solitaire::core::GameState;
//!
//! let config = GameConfig::builder().seed(1).build().unwrap();
//! let game = GameState::new_game(&config);
//!
//! // Same column twice is always refused; the state is returned unchanged.
//! assert_eq!(game.move_card(0, 0), game);
//! assert!(game.try_move_card(0, 0).is_err());
//!
//! let undone = game.undo();
//! assert_eq!(undone, game);
//! ```

pub mod config;
pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use config::GameConfig;
pub use core::{Card, Chain, Domino, GameState, MoveError, Pair, PairLabel};
pub use snapshot::{restore_or_deal, Snapshot, SnapshotError};
