//! The root game aggregate.
//!
//! `GameState` is an immutable value. Every transition borrows the current
//! state and returns a new one; a rejected transition returns a clone that
//! compares equal to its input, so callers can detect refusal by comparison
//! or call the matching `try_*` method to learn the reason.

use super::card::Card;
use super::chain::{check_win, Chain};
use super::deck::{create_deck, deal_tableau, shuffle_deck, shuffle_with_rng, Tableau};
use super::domino::{Domino, DominoId};
use super::error::MoveError;
use super::history::History;
use super::pair::Pair;
use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Tableau columns, each listed bottom card first.
    pub tableau: Tableau,
    /// Formed pairs, at most [`MAX_PAIRS`](super::pair::MAX_PAIRS).
    pub pairs: Vec<Pair>,
    /// Every formed domino, chained or not.
    pub dominos: Vec<Domino>,
    /// Chains in display order; none is ever empty.
    pub chains: Vec<Chain>,
    /// Number of accepted moves. Never decreases except through undo.
    pub move_count: u32,
    /// Prior positions for undo, newest last.
    pub history: History,
}

impl GameState {
    /// A game over the given tableau with nothing formed yet.
    pub fn new(tableau: Tableau) -> Self {
        Self::with_history(tableau, History::default())
    }

    pub(crate) fn with_history(tableau: Tableau, history: History) -> Self {
        Self {
            tableau,
            pairs: Vec::new(),
            dominos: Vec::new(),
            chains: Vec::new(),
            move_count: 0,
            history,
        }
    }

    /// Deal a freshly shuffled game.
    ///
    /// Seeded configurations always produce the same deal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_solitaire::config::GameConfig;
    /// use domino_solitaire::core::GameState;
    ///
    /// let config = GameConfig::builder().seed(7).build().unwrap();
    /// let game = GameState::new_game(&config);
    /// assert_eq!(game.tableau.len(), 8);
    /// assert_eq!(game, GameState::new_game(&config));
    /// ```
    pub fn new_game(config: &GameConfig) -> Self {
        let deck = create_deck();
        let shuffled = match config.seed {
            Some(seed) => shuffle_with_rng(&deck, &mut StdRng::seed_from_u64(seed)),
            None => shuffle_with_rng(&deck, &mut rand::rng()),
        };
        info!(
            seed = ?config.seed,
            columns = config.column_count,
            "Dealt new game"
        );
        Self::from_deck(&shuffled, config)
    }

    /// Deal using an injected unit source instead of a `rand` generator.
    pub fn deal_with<F>(config: &GameConfig, next_unit: F) -> Self
    where
        F: FnMut() -> f64,
    {
        let shuffled = shuffle_deck(&create_deck(), next_unit);
        Self::from_deck(&shuffled, config)
    }

    fn from_deck(deck: &[Card], config: &GameConfig) -> Self {
        Self::with_history(
            deal_tableau(deck, config.column_count),
            History::new(config.history_capacity),
        )
    }

    /// Whether the chains form the single closed loop of 13 dominos.
    pub fn is_won(&self) -> bool {
        check_win(&self.chains)
    }

    /// Dominos not yet placed in any chain.
    pub fn available_dominos(&self) -> impl Iterator<Item = &Domino> {
        self.dominos.iter().filter(|d| !d.in_chain)
    }

    pub fn domino(&self, id: DominoId) -> Option<&Domino> {
        self.dominos.iter().find(|d| d.id == id)
    }

    /// Cards on the tableau plus cards held in pairs and dominos.
    pub fn card_count(&self) -> usize {
        self.tableau.iter().map(Vec::len).sum::<usize>()
            + self.pairs.len() * 2
            + self.dominos.len() * 4
    }

    /// Move a pair to a new position in the pool. Not counted as a move.
    pub fn reorder_pairs(&self, from: usize, to: usize) -> GameState {
        self.settle("reorder_pairs", self.try_reorder_pairs(from, to))
    }

    pub fn try_reorder_pairs(&self, from: usize, to: usize) -> Result<GameState, MoveError> {
        let pairs = reorder(&self.pairs, from, to)?;
        Ok(GameState {
            pairs,
            ..self.clone()
        })
    }

    /// Move a domino to a new position in the pool. Not counted as a move.
    pub fn reorder_dominos(&self, from: usize, to: usize) -> GameState {
        self.settle("reorder_dominos", self.try_reorder_dominos(from, to))
    }

    pub fn try_reorder_dominos(&self, from: usize, to: usize) -> Result<GameState, MoveError> {
        let dominos = reorder(&self.dominos, from, to)?;
        Ok(GameState {
            dominos,
            ..self.clone()
        })
    }

    /// Move a chain to a new position in the chain list. Not counted as a move.
    pub fn reorder_chains(&self, from: usize, to: usize) -> GameState {
        self.settle("reorder_chains", self.try_reorder_chains(from, to))
    }

    pub fn try_reorder_chains(&self, from: usize, to: usize) -> Result<GameState, MoveError> {
        let chains = reorder(&self.chains, from, to)?;
        Ok(GameState {
            chains,
            ..self.clone()
        })
    }

    /// Start of every counted move: records the current state in history
    /// and bumps the move counter on the returned copy.
    pub(crate) fn advance(&self) -> GameState {
        GameState {
            history: self.history.record(self.history_entry()),
            move_count: self.move_count + 1,
            ..self.clone()
        }
    }

    /// Collapse a `try_*` result into the no-op contract.
    pub(crate) fn settle(
        &self,
        operation: &'static str,
        result: Result<GameState, MoveError>,
    ) -> GameState {
        match result {
            Ok(next) => next,
            Err(err) => {
                debug!(operation, reason = %err, "Transition rejected");
                self.clone()
            }
        }
    }

    pub(crate) fn check_column(&self, column: usize) -> Result<(), MoveError> {
        if column < self.tableau.len() {
            Ok(())
        } else {
            Err(MoveError::ColumnOutOfRange {
                column,
                count: self.tableau.len(),
            })
        }
    }
}

/// Remove every listed position from `items`, highest first so earlier
/// removals never shift a later target. Duplicates and out-of-range
/// positions are ignored.
pub(crate) fn remove_positions<T>(items: &mut Vec<T>, positions: &[usize]) {
    let mut ordered = positions.to_vec();
    ordered.sort_unstable_by(|a, b| b.cmp(a));
    ordered.dedup();
    for position in ordered {
        if position < items.len() {
            items.remove(position);
        }
    }
}

fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, MoveError> {
    let len = items.len();
    if from == to || from >= len || to >= len {
        return Err(MoveError::InvalidReorder { from, to, len });
    }
    let mut reordered = items.to_vec();
    let item = reordered.remove(from);
    reordered.insert(to, item);
    Ok(reordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};
    use crate::core::deck::DECK_SIZE;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn sample_pairs() -> Vec<Pair> {
        vec![
            Pair::new(card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Clubs)).unwrap(),
            Pair::new(card(Rank::Five, Suit::Diamonds), card(Rank::Nine, Suit::Spades)).unwrap(),
            Pair::new(card(Rank::Two, Suit::Hearts), card(Rank::Queen, Suit::Spades)).unwrap(),
        ]
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let config = GameConfig::builder().seed(42).build().unwrap();
        assert_eq!(GameState::new_game(&config), GameState::new_game(&config));

        let other = GameConfig::builder().seed(43).build().unwrap();
        assert_ne!(
            GameState::new_game(&config).tableau,
            GameState::new_game(&other).tableau
        );
    }

    #[test]
    fn new_game_starts_empty_handed() {
        let game = GameState::new_game(&GameConfig::default());
        assert_eq!(game.tableau.len(), 8);
        assert_eq!(game.card_count(), DECK_SIZE);
        assert!(game.pairs.is_empty());
        assert!(game.dominos.is_empty());
        assert!(game.chains.is_empty());
        assert_eq!(game.move_count, 0);
        assert!(game.history.is_empty());
        assert!(!game.is_won());
    }

    #[test]
    fn deal_with_uses_injected_source() {
        let config = GameConfig::default();
        let a = GameState::deal_with(&config, || 0.25);
        let b = GameState::deal_with(&config, || 0.25);
        assert_eq!(a, b);
        assert_eq!(a.card_count(), DECK_SIZE);
    }

    #[test]
    fn reorder_moves_item_to_target_position() {
        let mut game = GameState::new(vec![Vec::new(); 8]);
        game.pairs = sample_pairs();

        let next = game.reorder_pairs(0, 2);
        assert_eq!(next.pairs[0], game.pairs[1]);
        assert_eq!(next.pairs[1], game.pairs[2]);
        assert_eq!(next.pairs[2], game.pairs[0]);
        assert_eq!(next.move_count, game.move_count);
        assert!(next.history.is_empty());
    }

    #[test]
    fn reorder_rejects_same_or_out_of_range_indices() {
        let mut game = GameState::new(vec![Vec::new(); 8]);
        game.pairs = sample_pairs();

        assert_eq!(game.reorder_pairs(1, 1), game);
        assert_eq!(game.reorder_pairs(0, 3), game);
        assert_eq!(game.reorder_pairs(5, 0), game);
        assert_eq!(game.reorder_dominos(0, 1), game);
        assert_eq!(game.reorder_chains(0, 1), game);
        assert_eq!(
            game.try_reorder_pairs(3, 0),
            Err(MoveError::InvalidReorder {
                from: 3,
                to: 0,
                len: 3
            })
        );
    }

    #[test]
    fn remove_positions_goes_highest_first() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        remove_positions(&mut items, &[1, 3]);
        assert_eq!(items, vec!['a', 'c', 'e']);

        let mut items = vec!['a', 'b', 'c'];
        remove_positions(&mut items, &[0, 2, 2, 9]);
        assert_eq!(items, vec!['b']);
    }
}
