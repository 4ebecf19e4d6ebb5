//! Chains of dominos and the win condition.
//!
//! A chain is an ordered run of links. Each link names a domino and shows
//! its two values in display order, oriented so neighbouring links share
//! the value at their common edge. The chain's start is the first link's
//! `display_value1`; its end is the last link's `display_value2`.
//!
//! Chains are not permanent: the last link can be removed and whole chains
//! dissolved, returning their dominos to the available pool. Every chain
//! transition is a counted move and is undoable.

use super::domino::{Domino, DominoId, PairLabel};
use super::error::MoveError;
use super::state::{remove_positions, GameState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Dominos in a winning chain (13 x 4 cards = the whole deck).
pub const WINNING_CHAIN_LENGTH: usize = 13;

/// One domino placed in a chain, with its values in display order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ChainLink {
    pub domino: DominoId,
    pub display_value1: PairLabel,
    pub display_value2: PairLabel,
}

impl ChainLink {
    /// Link showing the domino's values in their stored order.
    pub fn upright(domino: &Domino) -> Self {
        Self {
            domino: domino.id,
            display_value1: domino.value1,
            display_value2: domino.value2,
        }
    }

    /// Link whose `display_value1` is `face`, or `None` if the domino
    /// lacks that value.
    fn facing_back(domino: &Domino, face: PairLabel) -> Option<Self> {
        let other = if domino.value1 == face {
            domino.value2
        } else if domino.value2 == face {
            domino.value1
        } else {
            return None;
        };
        Some(Self {
            domino: domino.id,
            display_value1: face,
            display_value2: other,
        })
    }

    /// Link whose `display_value2` is `face`.
    fn facing_forward(domino: &Domino, face: PairLabel) -> Option<Self> {
        Self::facing_back(domino, face).map(|link| link.flipped())
    }

    fn flipped(self) -> Self {
        Self {
            domino: self.domino,
            display_value1: self.display_value2,
            display_value2: self.display_value1,
        }
    }
}

/// The two exposed values of a non-empty chain.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChainEnds {
    pub start: PairLabel,
    pub end: PairLabel,
}

/// An ordered run of dominos.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Chain {
    links: Vec<ChainLink>,
}

impl Chain {
    /// A one-domino chain showing the domino's values as stored.
    pub fn single(domino: &Domino) -> Self {
        Self {
            links: vec![ChainLink::upright(domino)],
        }
    }

    pub fn from_links(links: Vec<ChainLink>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, id: DominoId) -> bool {
        self.links.iter().any(|link| link.domino == id)
    }

    /// Start and end values, or `None` for an empty chain.
    pub fn ends(&self) -> Option<ChainEnds> {
        let first = self.links.first()?;
        let last = self.links.last()?;
        Some(ChainEnds {
            start: first.display_value1,
            end: last.display_value2,
        })
    }

    /// Same dominos in reverse order, each link flipped so neighbours
    /// still meet on equal values.
    pub fn reversed(&self) -> Self {
        Self {
            links: self.links.iter().rev().map(|link| link.flipped()).collect(),
        }
    }

    /// At least two dominos and the start value equals the end value.
    pub fn is_circular(&self) -> bool {
        check_circular(self)
    }

    /// Append `domino` at the end if one of its values matches the end value.
    fn extended_at_end(&self, domino: &Domino) -> Option<Self> {
        let link = ChainLink::facing_back(domino, self.ends()?.end)?;
        let mut links = self.links.clone();
        links.push(link);
        Some(Self { links })
    }

    /// Prepend `domino` at the start if one of its values matches the start value.
    fn extended_at_start(&self, domino: &Domino) -> Option<Self> {
        let link = ChainLink::facing_forward(domino, self.ends()?.start)?;
        let mut links = Vec::with_capacity(self.links.len() + 1);
        links.push(link);
        links.extend_from_slice(&self.links);
        Some(Self { links })
    }

    fn extended(&self, domino: &Domino) -> Option<Self> {
        self.extended_at_end(domino)
            .or_else(|| self.extended_at_start(domino))
    }

    fn joined(&self, other: &Chain) -> Option<Self> {
        let ours = self.ends()?;
        let theirs = other.ends()?;
        let (head, tail) = if ours.end == theirs.start {
            (self.clone(), other.clone())
        } else if ours.end == theirs.end {
            (self.clone(), other.reversed())
        } else if ours.start == theirs.end {
            (other.clone(), self.clone())
        } else if ours.start == theirs.start {
            (other.reversed(), self.clone())
        } else {
            return None;
        };
        let mut links = head.links;
        links.extend(tail.links);
        Some(Self { links })
    }
}

/// Start and end values of a chain; `None` when it is empty.
pub fn chain_end_values(chain: &Chain) -> Option<ChainEnds> {
    chain.ends()
}

/// Whether two dominos share at least one value.
pub fn can_connect_dominos(first: &Domino, second: &Domino) -> bool {
    first.has_value(second.value1) || first.has_value(second.value2)
}

/// Whether any exposed end of one chain matches any exposed end of the other.
pub fn can_join_chains(first: &Chain, second: &Chain) -> bool {
    match (first.ends(), second.ends()) {
        (Some(a), Some(b)) => {
            a.start == b.start || a.start == b.end || a.end == b.start || a.end == b.end
        }
        _ => false,
    }
}

pub fn check_circular(chain: &Chain) -> bool {
    chain.len() >= 2 && chain.ends().is_some_and(|ends| ends.start == ends.end)
}

/// Exactly one chain, holding all 13 dominos, closed into a loop.
pub fn check_win(chains: &[Chain]) -> bool {
    match chains {
        [only] => only.len() == WINNING_CHAIN_LENGTH && only.is_circular(),
        _ => false,
    }
}

/// Dominos across all chains.
pub fn total_chain_length(chains: &[Chain]) -> usize {
    chains.iter().map(Chain::len).sum()
}

impl GameState {
    /// Wrap an unchained domino in a new one-domino chain.
    pub fn start_chain(&self, domino_index: usize) -> GameState {
        self.settle("start_chain", self.try_start_chain(domino_index))
    }

    pub fn try_start_chain(&self, domino_index: usize) -> Result<GameState, MoveError> {
        let domino = self.unchained_domino(domino_index)?;
        Ok(self.place(domino_index, None, Chain::single(domino)))
    }

    /// Append a domino at the end of a chain. Rejected if it does not match.
    pub fn extend_chain_end(&self, chain_index: usize, domino_index: usize) -> GameState {
        self.settle(
            "extend_chain_end",
            self.try_extend_chain_end(chain_index, domino_index),
        )
    }

    pub fn try_extend_chain_end(
        &self,
        chain_index: usize,
        domino_index: usize,
    ) -> Result<GameState, MoveError> {
        let domino = self.unchained_domino(domino_index)?;
        let chain = self.chain_at(chain_index)?;
        let extended = chain
            .extended_at_end(domino)
            .ok_or(MoveError::NoConnection {
                index: domino_index,
                chain: chain_index,
            })?;
        Ok(self.place(domino_index, Some(chain_index), extended))
    }

    /// Prepend a domino at the start of a chain. Rejected if it does not match.
    pub fn extend_chain_start(&self, chain_index: usize, domino_index: usize) -> GameState {
        self.settle(
            "extend_chain_start",
            self.try_extend_chain_start(chain_index, domino_index),
        )
    }

    pub fn try_extend_chain_start(
        &self,
        chain_index: usize,
        domino_index: usize,
    ) -> Result<GameState, MoveError> {
        let domino = self.unchained_domino(domino_index)?;
        let chain = self.chain_at(chain_index)?;
        let extended = chain
            .extended_at_start(domino)
            .ok_or(MoveError::NoConnection {
                index: domino_index,
                chain: chain_index,
            })?;
        Ok(self.place(domino_index, Some(chain_index), extended))
    }

    /// Place a domino wherever it fits.
    ///
    /// With no chains yet, the domino starts the first one whatever the
    /// target. With a target chain, tries its end, then its start, then starts a new
    /// chain. Without one, takes the first chain accepting the domino (end
    /// before start) or starts a new chain. A valid unchained domino is
    /// never refused.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_solitaire::core::{Card, Domino, GameState, Pair, Rank, Suit};
    ///
    /// let pair = |a: Card, b: Card| Pair::new(a, b).unwrap();
    /// let first = Domino::from_pairs(
    ///     pair(Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::King, Suit::Clubs)),
    ///     pair(Card::new(Rank::Five, Suit::Diamonds), Card::new(Rank::Nine, Suit::Spades)),
    /// ).unwrap();
    /// let second = Domino::from_pairs(
    ///     pair(Card::new(Rank::Three, Suit::Diamonds), Card::new(Rank::Jack, Suit::Clubs)),
    ///     pair(Card::new(Rank::Five, Suit::Hearts), Card::new(Rank::Nine, Suit::Spades)),
    /// );
    /// assert!(second.is_some());
    ///
    /// let mut game = GameState::new(vec![Vec::new(); 8]);
    /// game.dominos = vec![first, second.unwrap()];
    ///
    /// let game = game.add_domino_to_chain(0, None).add_domino_to_chain(1, None);
    /// assert_eq!(game.chains.len(), 1);
    /// let ends = game.chains[0].ends().unwrap();
    /// assert_eq!(ends.start.to_string(), "A-K");
    /// assert_eq!(ends.end.to_string(), "3-J");
    /// ```
    pub fn add_domino_to_chain(&self, domino_index: usize, target: Option<usize>) -> GameState {
        self.settle(
            "add_domino_to_chain",
            self.try_add_domino_to_chain(domino_index, target),
        )
    }

    pub fn try_add_domino_to_chain(
        &self,
        domino_index: usize,
        target: Option<usize>,
    ) -> Result<GameState, MoveError> {
        let domino = self.unchained_domino(domino_index)?;
        let placement = match target {
            _ if self.chains.is_empty() => None,
            Some(chain_index) => self
                .chain_at(chain_index)?
                .extended(domino)
                .map(|chain| (chain_index, chain)),
            None => self
                .chains
                .iter()
                .enumerate()
                .find_map(|(index, chain)| chain.extended(domino).map(|c| (index, c))),
        };
        Ok(match placement {
            Some((chain_index, chain)) => self.place(domino_index, Some(chain_index), chain),
            None => self.place(domino_index, None, Chain::single(domino)),
        })
    }

    /// Merge two chains whose exposed ends match into one, appended last.
    pub fn join_chains(&self, first: usize, second: usize) -> GameState {
        self.settle("join_chains", self.try_join_chains(first, second))
    }

    pub fn try_join_chains(&self, first: usize, second: usize) -> Result<GameState, MoveError> {
        if first == second {
            return Err(MoveError::SameChain { index: first });
        }
        let merged = self
            .chain_at(first)?
            .joined(self.chain_at(second)?)
            .ok_or(MoveError::ChainsDoNotJoin { first, second })?;

        let mut next = self.advance();
        remove_positions(&mut next.chains, &[first, second]);
        debug!(first, second, length = merged.len(), "Joined chains");
        next.chains.push(merged);
        Ok(next.announce_win())
    }

    /// Take the last domino off a chain, deleting the chain if it empties.
    pub fn remove_last_from_chain(&self, chain_index: usize) -> GameState {
        self.settle(
            "remove_last_from_chain",
            self.try_remove_last_from_chain(chain_index),
        )
    }

    pub fn try_remove_last_from_chain(&self, chain_index: usize) -> Result<GameState, MoveError> {
        self.chain_at(chain_index)?;

        let mut next = self.advance();
        let chain = &mut next.chains[chain_index];
        let removed = chain.links.pop();
        if chain.is_empty() {
            next.chains.remove(chain_index);
        }
        if let Some(link) = removed {
            next.release(&[link.domino]);
        }
        Ok(next)
    }

    /// Dissolve one chain, returning its dominos to the pool.
    pub fn clear_chain(&self, chain_index: usize) -> GameState {
        self.settle("clear_chain", self.try_clear_chain(chain_index))
    }

    pub fn try_clear_chain(&self, chain_index: usize) -> Result<GameState, MoveError> {
        self.chain_at(chain_index)?;

        let mut next = self.advance();
        let chain = next.chains.remove(chain_index);
        let ids: Vec<DominoId> = chain.links.iter().map(|link| link.domino).collect();
        next.release(&ids);
        Ok(next)
    }

    /// Dissolve every chain.
    pub fn clear_all_chains(&self) -> GameState {
        self.settle("clear_all_chains", self.try_clear_all_chains())
    }

    pub fn try_clear_all_chains(&self) -> Result<GameState, MoveError> {
        if self.chains.is_empty() {
            return Err(MoveError::NoChains);
        }

        let mut next = self.advance();
        next.chains.clear();
        for domino in &mut next.dominos {
            domino.in_chain = false;
        }
        Ok(next)
    }

    fn unchained_domino(&self, index: usize) -> Result<&Domino, MoveError> {
        let domino = self.dominos.get(index).ok_or(MoveError::DominoOutOfRange {
            index,
            count: self.dominos.len(),
        })?;
        if domino.in_chain {
            return Err(MoveError::DominoAlreadyChained { index });
        }
        Ok(domino)
    }

    fn chain_at(&self, index: usize) -> Result<&Chain, MoveError> {
        self.chains.get(index).ok_or(MoveError::ChainOutOfRange {
            index,
            count: self.chains.len(),
        })
    }

    /// Record a move that puts `domino_index` into `chain`, either replacing
    /// the chain at `replace` or appended as a new chain.
    fn place(&self, domino_index: usize, replace: Option<usize>, chain: Chain) -> GameState {
        let mut next = self.advance();
        next.dominos[domino_index].in_chain = true;
        match replace {
            Some(index) => next.chains[index] = chain,
            None => {
                debug!(domino = %next.dominos[domino_index].id, "Started new chain");
                next.chains.push(chain);
            }
        }
        next.announce_win()
    }

    fn release(&mut self, ids: &[DominoId]) {
        for domino in &mut self.dominos {
            if ids.contains(&domino.id) {
                domino.in_chain = false;
            }
        }
    }

    fn announce_win(self) -> GameState {
        if self.is_won() {
            info!(moves = self.move_count, "Chain closed into a winning loop");
        }
        self
    }
}
