//! Dominos: two pairs that together cover all four suits.
//!
//! Each pair contributes a label (its two ranks, low first). A domino's two
//! values are those labels in normalized order, so the order the pairs were
//! picked in never affects chain matching.

use super::card::{Card, Rank, Suit};
use super::error::MoveError;
use super::pair::Pair;
use super::state::{remove_positions, GameState};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Namespace for deriving domino ids from their cards.
const DOMINO_NAMESPACE: Uuid = Uuid::from_u128(0x6f1d_2c7a_93b4_4e58_a0c1_5d2e_8b7f_3a19);

/// The end label of a domino: the ranks of one pair, lower value first.
///
/// Ordering follows the lower rank, which fully determines a label because
/// both ranks of a pair sum to 14.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PairLabel {
    low: Rank,
    high: Rank,
}

impl PairLabel {
    /// Label for two ranks given in any order.
    pub fn new(a: Rank, b: Rank) -> Self {
        if a.value() <= b.value() {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn high(&self) -> Rank {
        self.high
    }
}

impl fmt::Display for PairLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl Pair {
    pub fn label(&self) -> PairLabel {
        pair_label(self)
    }
}

/// Label of a pair: its cards sorted by value, ranks joined low first.
pub fn pair_label(pair: &Pair) -> PairLabel {
    PairLabel::new(pair.red().rank, pair.black().rank)
}

/// Whether two pairs cover all four suits between them.
///
/// Values are irrelevant; only suit coverage matters.
pub fn can_form_domino(first: &Pair, second: &Pair) -> bool {
    let suits: HashSet<Suit> = first
        .cards()
        .iter()
        .chain(second.cards().iter())
        .map(|card| card.suit)
        .collect();
    suits.len() == Suit::ALL.len()
}

/// Order two labels by the value of their lower rank, smallest first.
///
/// # Example
///
/// ```rust
/// use domino_solitaire::core::{normalize_domino_values, PairLabel, Rank};
///
/// let ace_king = PairLabel::new(Rank::Ace, Rank::King);
/// let five_nine = PairLabel::new(Rank::Five, Rank::Nine);
///
/// assert_eq!(normalize_domino_values(five_nine, ace_king), (ace_king, five_nine));
/// assert_eq!(normalize_domino_values(ace_king, five_nine), (ace_king, five_nine));
/// ```
pub fn normalize_domino_values(first: PairLabel, second: PairLabel) -> (PairLabel, PairLabel) {
    if second.low().value() < first.low().value() {
        (second, first)
    } else {
        (first, second)
    }
}

/// Stable identifier of a domino, derived from the four cards it holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DominoId(Uuid);

impl DominoId {
    fn for_cards(cards: &[Card]) -> Self {
        let mut ids: Vec<String> = cards.iter().map(Card::id).collect();
        ids.sort();
        Self(Uuid::new_v5(&DOMINO_NAMESPACE, ids.concat().as_bytes()))
    }
}

impl fmt::Display for DominoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Two pairs joined into one chain piece.
///
/// `pair1` carries `value1` and `pair2` carries `value2`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Domino {
    pub id: DominoId,
    pub value1: PairLabel,
    pub value2: PairLabel,
    pub pair1: Pair,
    pub pair2: Pair,
    /// Set while the domino sits in a chain.
    pub in_chain: bool,
}

impl Domino {
    /// Build a domino from two pairs, or `None` if a suit repeats.
    pub fn from_pairs(first: Pair, second: Pair) -> Option<Self> {
        if !can_form_domino(&first, &second) {
            return None;
        }
        let (value1, value2) = normalize_domino_values(first.label(), second.label());
        let (pair1, pair2) = if value1 == first.label() {
            (first, second)
        } else {
            (second, first)
        };
        Some(Self {
            id: DominoId::for_cards(&[pair1.cards(), pair2.cards()].concat()),
            value1,
            value2,
            pair1,
            pair2,
            in_chain: false,
        })
    }

    /// All four cards, `pair1` first.
    pub fn cards(&self) -> [Card; 4] {
        let [a, b] = self.pair1.cards();
        let [c, d] = self.pair2.cards();
        [a, b, c, d]
    }

    pub fn has_value(&self, label: PairLabel) -> bool {
        self.value1 == label || self.value2 == label
    }
}

impl GameState {
    /// Combine two pairs from the pool into a domino.
    pub fn create_domino_from_pairs(&self, first: usize, second: usize) -> GameState {
        self.settle(
            "create_domino_from_pairs",
            self.try_create_domino_from_pairs(first, second),
        )
    }

    pub fn try_create_domino_from_pairs(
        &self,
        first: usize,
        second: usize,
    ) -> Result<GameState, MoveError> {
        if first == second {
            return Err(MoveError::SamePair { index: first });
        }
        let pair_at = |index: usize| {
            self.pairs
                .get(index)
                .copied()
                .ok_or(MoveError::PairOutOfRange {
                    index,
                    count: self.pairs.len(),
                })
        };
        let domino =
            Domino::from_pairs(pair_at(first)?, pair_at(second)?).ok_or(MoveError::SuitsRepeat)?;

        let mut next = self.advance();
        remove_positions(&mut next.pairs, &[first, second]);
        next.dominos.push(domino);
        Ok(next)
    }
}
