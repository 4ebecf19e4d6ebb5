//! Bounded undo history.
//!
//! History is immutable: `record` returns a new history with the entry
//! added, evicting the oldest entry once capacity is reached.

use super::chain::Chain;
use super::deck::Tableau;
use super::domino::Domino;
use super::error::MoveError;
use super::pair::Pair;
use super::state::GameState;
use std::collections::VecDeque;
use tracing::debug;

/// Default number of snapshots kept for undo.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Everything undo restores. Owned copies, never shared with live state.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub tableau: Tableau,
    pub pairs: Vec<Pair>,
    pub dominos: Vec<Domino>,
    pub chains: Vec<Chain>,
    pub move_count: u32,
}

/// Ordered stack of prior states, oldest first.
///
/// # Example
///
/// ```rust
/// use domino_solitaire::core::{History, HistoryEntry};
///
/// let entry = HistoryEntry {
///     tableau: vec![Vec::new(); 8],
///     pairs: Vec::new(),
///     dominos: Vec::new(),
///     chains: Vec::new(),
///     move_count: 0,
/// };
///
/// let history = History::new(2);
/// let history = history.record(entry.clone()).record(entry.clone()).record(entry);
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// An empty history holding at most `capacity` entries (minimum one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record an entry, returning a new history.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// Split off the most recent entry.
    pub fn pop(&self) -> Option<(HistoryEntry, History)> {
        let mut entries = self.entries.clone();
        let latest = entries.pop_back()?;
        Some((
            latest,
            Self {
                entries,
                capacity: self.capacity,
            },
        ))
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl GameState {
    /// Restore the state before the most recent move.
    ///
    /// No-op when there is nothing to undo.
    pub fn undo(&self) -> GameState {
        self.settle("undo", self.try_undo())
    }

    pub fn try_undo(&self) -> Result<GameState, MoveError> {
        let (entry, history) = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        debug!(restored_move = entry.move_count, "Undid move");
        Ok(GameState {
            tableau: entry.tableau,
            pairs: entry.pairs,
            dominos: entry.dominos,
            chains: entry.chains,
            move_count: entry.move_count,
            history,
        })
    }

    pub(crate) fn history_entry(&self) -> HistoryEntry {
        HistoryEntry {
            tableau: self.tableau.clone(),
            pairs: self.pairs.clone(),
            dominos: self.dominos.clone(),
            chains: self.chains.clone(),
            move_count: self.move_count,
        }
    }
}
