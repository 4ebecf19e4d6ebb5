//! Pure rules engine.
//!
//! This module contains every game rule as a pure function or as a
//! transition on [`GameState`]:
//! - Deck construction, shuffling and dealing
//! - Tableau moves and pair formation
//! - Domino formation and label normalization
//! - Chain building, joining and the win condition
//! - Bounded undo history
//!
//! Nothing here performs I/O. Transitions borrow a state and return a new
//! one; rejected transitions return an unchanged copy.

mod card;
mod chain;
mod deck;
mod domino;
mod error;
mod history;
mod pair;
mod state;
mod tableau;

pub use card::{Card, Rank, Suit, COMPLEMENT_TOTAL};
pub use chain::{
    can_connect_dominos, can_join_chains, chain_end_values, check_circular, check_win,
    total_chain_length, Chain, ChainEnds, ChainLink, WINNING_CHAIN_LENGTH,
};
pub use deck::{
    create_deck, deal_tableau, shuffle_deck, shuffle_with_rng, Column, Tableau, DECK_SIZE,
    DEFAULT_COLUMNS,
};
pub use domino::{can_form_domino, normalize_domino_values, pair_label, Domino, DominoId, PairLabel};
pub use error::MoveError;
pub use history::{History, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use pair::{can_pair, Pair, MAX_PAIRS};
pub use state::GameState;
pub use tableau::can_stack;
