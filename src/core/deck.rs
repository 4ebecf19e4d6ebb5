//! Deck construction, shuffling and dealing.
//!
//! Randomness is injected: `shuffle_deck` takes any source of doubles in
//! `[0, 1)`, so tests can replay a fixed sequence.

use super::card::{Card, Rank, Suit};
use rand::Rng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Default number of tableau columns.
pub const DEFAULT_COLUMNS: usize = 8;

/// One tableau column, bottom card first.
pub type Column = Vec<Card>;

/// The playing area: an ordered list of columns.
pub type Tableau = Vec<Column>;

/// Build all 52 cards in canonical suit-major order
/// (hearts, diamonds, clubs, spades; Ace to King within each suit).
pub fn create_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
        .collect()
}

/// Fisher-Yates shuffle driven by `next_unit`, which must yield values in `[0, 1)`.
///
/// The input is left untouched; a new vector is returned.
///
/// # Example
///
/// ```rust
/// use domino_solitaire::core::{create_deck, shuffle_deck};
///
/// let deck = create_deck();
/// let shuffled = shuffle_deck(&deck, || 0.5);
/// assert_eq!(shuffled.len(), deck.len());
/// assert_eq!(shuffle_deck(&deck, || 0.5), shuffled);
/// ```
pub fn shuffle_deck<F>(deck: &[Card], mut next_unit: F) -> Vec<Card>
where
    F: FnMut() -> f64,
{
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let unit = next_unit().clamp(0.0, 1.0);
        // A source returning exactly 1.0 would otherwise index past `i`.
        let j = ((unit * (i + 1) as f64).floor() as usize).min(i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Shuffle using any `rand` generator as the unit source.
pub fn shuffle_with_rng<R: Rng>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    shuffle_deck(deck, || rng.random::<f64>())
}

/// Deal round-robin: card `i` goes to column `i % column_count`, keeping
/// deck order within each column. A zero column count is treated as one
/// column so no card is ever dropped.
pub fn deal_tableau(deck: &[Card], column_count: usize) -> Tableau {
    let column_count = column_count.max(1);
    let mut tableau: Tableau = vec![Vec::new(); column_count];
    for (index, card) in deck.iter().enumerate() {
        tableau[index % column_count].push(*card);
    }
    tableau
}
