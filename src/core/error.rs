//! Reasons a transition can be rejected.

use thiserror::Error;

/// Why a transition left the game state unchanged.
///
/// The no-op transition methods swallow this (after logging it); the
/// `try_*` variants hand it back to callers that want to explain a refusal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Source and destination are the same column ({column})")]
    SameColumn { column: usize },

    #[error("Column {column} does not exist (tableau has {count} columns)")]
    ColumnOutOfRange { column: usize, count: usize },

    #[error("Column {column} is empty")]
    EmptyColumn { column: usize },

    #[error("{card} cannot be stacked on {onto}")]
    CannotStack { card: String, onto: String },

    #[error("Pair pool is full ({capacity} pairs)")]
    PairPoolFull { capacity: usize },

    #[error("{first} and {second} do not form a pair")]
    CannotPair { first: String, second: String },

    #[error("Pair {index} does not exist ({count} pairs formed)")]
    PairOutOfRange { index: usize, count: usize },

    #[error("A domino needs two different pairs (both were {index})")]
    SamePair { index: usize },

    #[error("Pairs repeat a suit; a domino needs all four suits")]
    SuitsRepeat,

    #[error("Domino {index} does not exist ({count} dominos formed)")]
    DominoOutOfRange { index: usize, count: usize },

    #[error("Domino {index} is already part of a chain")]
    DominoAlreadyChained { index: usize },

    #[error("Domino {index} does not connect to chain {chain}")]
    NoConnection { index: usize, chain: usize },

    #[error("Chain {index} does not exist ({count} chains)")]
    ChainOutOfRange { index: usize, count: usize },

    #[error("Cannot join chain {index} with itself")]
    SameChain { index: usize },

    #[error("Chains {first} and {second} have no matching ends")]
    ChainsDoNotJoin { first: usize, second: usize },

    #[error("No chains to clear")]
    NoChains,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Cannot move item {from} to {to} in a list of {len}")]
    InvalidReorder { from: usize, to: usize, len: usize },
}
