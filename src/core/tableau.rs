//! Moving cards between tableau columns.

use super::card::{Card, COMPLEMENT_TOTAL};
use super::error::MoveError;
use super::state::GameState;

/// Whether `card` may be placed on `onto`: equal ranks, or values summing
/// to 14. False when either card is missing.
pub fn can_stack(card: Option<&Card>, onto: Option<&Card>) -> bool {
    match (card, onto) {
        (Some(card), Some(onto)) => {
            card.rank == onto.rank || card.value() + onto.value() == COMPLEMENT_TOTAL
        }
        _ => false,
    }
}

impl GameState {
    /// Move the top card of `from` onto `to`.
    ///
    /// Empty destination columns accept any card.
    pub fn move_card(&self, from: usize, to: usize) -> GameState {
        self.settle("move_card", self.try_move_card(from, to))
    }

    pub fn try_move_card(&self, from: usize, to: usize) -> Result<GameState, MoveError> {
        if from == to {
            return Err(MoveError::SameColumn { column: from });
        }
        self.check_column(from)?;
        self.check_column(to)?;

        let card = self.tableau[from]
            .last()
            .ok_or(MoveError::EmptyColumn { column: from })?;
        if let Some(onto) = self.tableau[to].last() {
            if !can_stack(Some(card), Some(onto)) {
                return Err(MoveError::CannotStack {
                    card: card.id(),
                    onto: onto.id(),
                });
            }
        }

        let mut next = self.advance();
        if let Some(card) = next.tableau[from].pop() {
            next.tableau[to].push(card);
        }
        Ok(next)
    }
}
