//! Red/black pairs and the bounded pair pool.

use super::card::{Card, COMPLEMENT_TOTAL};
use super::error::MoveError;
use super::state::GameState;
use serde::{Deserialize, Serialize};

/// Most pairs that may exist at once.
pub const MAX_PAIRS: usize = 6;

/// Whether two cards pair: opposite colours with values summing to 14.
pub fn can_pair(first: Option<&Card>, second: Option<&Card>) -> bool {
    match (first, second) {
        (Some(a), Some(b)) => {
            a.is_red() != b.is_red() && a.value() + b.value() == COMPLEMENT_TOTAL
        }
        _ => false,
    }
}

/// Two complementary cards, red card first.
///
/// Only constructible from cards that satisfy [`can_pair`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Pair {
    red: Card,
    black: Card,
}

impl Pair {
    /// Pair two cards in either order, or `None` if they do not pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_solitaire::core::{Card, Pair, Rank, Suit};
    ///
    /// let king = Card::new(Rank::King, Suit::Clubs);
    /// let ace = Card::new(Rank::Ace, Suit::Hearts);
    ///
    /// let pair = Pair::new(king, ace).unwrap();
    /// assert_eq!(pair.red(), ace);
    /// assert_eq!(pair.label().to_string(), "A-K");
    /// ```
    pub fn new(a: Card, b: Card) -> Option<Self> {
        if !can_pair(Some(&a), Some(&b)) {
            return None;
        }
        let (red, black) = if a.is_red() { (a, b) } else { (b, a) };
        Some(Self { red, black })
    }

    pub fn red(&self) -> Card {
        self.red
    }

    pub fn black(&self) -> Card {
        self.black
    }

    /// Both cards, red first.
    pub fn cards(&self) -> [Card; 2] {
        [self.red, self.black]
    }
}

impl GameState {
    /// Pair the top cards of two columns, removing them from the tableau.
    pub fn create_pair_from_tableau(&self, from: usize, to: usize) -> GameState {
        self.settle(
            "create_pair_from_tableau",
            self.try_create_pair_from_tableau(from, to),
        )
    }

    pub fn try_create_pair_from_tableau(
        &self,
        from: usize,
        to: usize,
    ) -> Result<GameState, MoveError> {
        if self.pairs.len() >= MAX_PAIRS {
            return Err(MoveError::PairPoolFull {
                capacity: MAX_PAIRS,
            });
        }
        if from == to {
            return Err(MoveError::SameColumn { column: from });
        }
        self.check_column(from)?;
        self.check_column(to)?;

        let first = self.tableau[from]
            .last()
            .ok_or(MoveError::EmptyColumn { column: from })?;
        let second = self.tableau[to]
            .last()
            .ok_or(MoveError::EmptyColumn { column: to })?;
        let pair = Pair::new(*first, *second).ok_or_else(|| MoveError::CannotPair {
            first: first.id(),
            second: second.id(),
        })?;

        let mut next = self.advance();
        next.tableau[from].pop();
        next.tableau[to].pop();
        next.pairs.push(pair);
        Ok(next)
    }
}
