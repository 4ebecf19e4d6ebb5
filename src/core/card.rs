//! Card identity: ranks, suits and the card value type.
//!
//! Cards are small `Copy` values. Everything the rules need (numeric value,
//! colour, display id) is derived from the `(rank, suit)` pair, so two cards
//! with the same rank and suit are the same card.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The numeric total two cards must reach to stack by sum or to pair.
pub const COMPLEMENT_TOTAL: u8 = 14;

/// One of the thirteen ranks, ordered by value (Ace low).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending value order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Fixed numeric weight: Ace = 1 up to King = 13.
    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Short symbol used in card ids and pair labels.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One of the four suits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "♥",
            Self::Diamonds => "♦",
            Self::Clubs => "♣",
            Self::Spades => "♠",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// # Example
///
/// ```rust
/// use domino_solitaire::core::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Diamonds);
/// assert_eq!(card.value(), 12);
/// assert!(card.is_red());
/// assert_eq!(card.id(), "Q♦");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Unique identifier: rank symbol followed by suit symbol.
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_run_from_one_to_thirteen() {
        let values: Vec<u8> = Rank::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, (1..=13).collect::<Vec<u8>>());
    }

    #[test]
    fn suit_colours_split_evenly() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Clubs.is_red());
        assert!(!Suit::Spades.is_red());
    }

    #[test]
    fn card_id_concatenates_rank_and_suit() {
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).id(), "10♠");
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).id(), "A♥");
    }

    #[test]
    fn card_serializes_correctly() {
        let card = Card::new(Rank::King, Suit::Clubs);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
