//! Structural validation of restored snapshots.
//!
//! Every check runs; all problems are reported together rather than
//! stopping at the first.

use super::{Snapshot, SNAPSHOT_VERSION};
use crate::config::GameConfig;
use crate::core::{Card, Domino, DominoId, Pair, DECK_SIZE, MAX_PAIRS};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single structural problem found in a snapshot
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotIssue {
    #[error("Snapshot version {found} is not supported, expected {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Tableau has {found} columns, expected {expected}")]
    WrongColumnCount { expected: usize, found: usize },

    #[error("{found} pairs stored, at most {max} allowed")]
    TooManyPairs { found: usize, max: usize },

    #[error("{red} and {black} are not a valid pair")]
    InvalidPair { red: String, black: String },

    #[error("Domino {id} does not cover all four suits")]
    InvalidDomino { id: String },

    #[error("Domino {id} does not match the pairs it holds")]
    DominoMismatch { id: String },

    #[error("Card {card} appears {count} times")]
    DuplicateCard { card: String, count: usize },

    #[error("{count} cards are missing")]
    MissingCards { count: usize },

    #[error("Chain {chain} names unknown domino {id}")]
    UnknownChainDomino { chain: usize, id: String },

    #[error("Chain {chain} has no links")]
    EmptyChain { chain: usize },

    #[error("Domino {id} is linked {count} times")]
    RepeatedChainDomino { id: String, count: usize },

    #[error("Chain {chain} link {link} shows values its domino does not have")]
    LinkValuesMismatch { chain: usize, link: usize },

    #[error("Chain {chain} has mismatched values after link {link}")]
    BrokenChain { chain: usize, link: usize },

    #[error("Domino {id} in_chain flag disagrees with chain membership")]
    InChainMismatch { id: String },
}

type Check = Validation<(), NonEmptyVec<SnapshotIssue>>;

fn check(ok: bool, issue: impl FnOnce() -> SnapshotIssue) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(issue())
    }
}

impl Snapshot {
    /// Validate the snapshot's shape against `config`, accumulating ALL issues.
    pub fn validate(&self, config: &GameConfig) -> Check {
        let mut checks: Vec<Check> = Vec::new();

        checks.push(check(self.version == SNAPSHOT_VERSION, || {
            SnapshotIssue::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            }
        }));

        checks.push(check(self.tableau.len() == config.column_count, || {
            SnapshotIssue::WrongColumnCount {
                expected: config.column_count,
                found: self.tableau.len(),
            }
        }));

        checks.push(check(self.pairs.len() <= MAX_PAIRS, || {
            SnapshotIssue::TooManyPairs {
                found: self.pairs.len(),
                max: MAX_PAIRS,
            }
        }));

        for pair in &self.pairs {
            let (red, black) = (pair.red(), pair.black());
            checks.push(check(Pair::new(red, black).is_some_and(|p| p.red() == red), || {
                SnapshotIssue::InvalidPair {
                    red: red.id(),
                    black: black.id(),
                }
            }));
        }

        for domino in &self.dominos {
            let rebuilt = Domino::from_pairs(domino.pair1, domino.pair2);
            checks.push(check(rebuilt.is_some(), || SnapshotIssue::InvalidDomino {
                id: domino.id.to_string(),
            }));
            let tampered = matches!(&rebuilt, Some(r)
                if r.id != domino.id || r.value1 != domino.value1 || r.value2 != domino.value2);
            checks.push(check(!tampered, || SnapshotIssue::DominoMismatch {
                id: domino.id.to_string(),
            }));
        }

        checks.extend(self.card_checks());
        checks.extend(self.chain_checks());

        Validation::all_vec(checks).map(|_| ())
    }

    fn card_checks(&self) -> Vec<Check> {
        let held = self
            .tableau
            .iter()
            .flatten()
            .copied()
            .chain(self.pairs.iter().flat_map(|p| p.cards()))
            .chain(self.dominos.iter().flat_map(|d| d.cards()));

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in held {
            *counts.entry(card).or_insert(0) += 1;
        }

        let mut duplicates: Vec<(Card, usize)> =
            counts.iter().filter(|(_, n)| **n > 1).map(|(c, n)| (*c, *n)).collect();
        duplicates.sort_by_key(|(card, _)| (card.suit, card.rank));

        let mut checks: Vec<Check> = duplicates
            .into_iter()
            .map(|(card, count)| {
                Validation::fail(SnapshotIssue::DuplicateCard {
                    card: card.id(),
                    count,
                })
            })
            .collect();

        let missing = DECK_SIZE.saturating_sub(counts.len());
        checks.push(check(missing == 0, || SnapshotIssue::MissingCards {
            count: missing,
        }));
        checks
    }

    fn chain_checks(&self) -> Vec<Check> {
        let mut checks = Vec::new();
        let mut uses: HashMap<DominoId, usize> = HashMap::new();

        for (index, chain) in self.chains.iter().enumerate() {
            checks.push(check(!chain.is_empty(), || SnapshotIssue::EmptyChain {
                chain: index,
            }));

            for (position, link) in chain.links().iter().enumerate() {
                *uses.entry(link.domino).or_insert(0) += 1;

                let Some(domino) = self.dominos.iter().find(|d| d.id == link.domino) else {
                    checks.push(Validation::fail(SnapshotIssue::UnknownChainDomino {
                        chain: index,
                        id: link.domino.to_string(),
                    }));
                    continue;
                };
                let shown = (link.display_value1, link.display_value2);
                checks.push(check(
                    shown == (domino.value1, domino.value2)
                        || shown == (domino.value2, domino.value1),
                    || SnapshotIssue::LinkValuesMismatch {
                        chain: index,
                        link: position,
                    },
                ));
            }
            for (position, pair) in chain.links().windows(2).enumerate() {
                checks.push(check(
                    pair[0].display_value2 == pair[1].display_value1,
                    || SnapshotIssue::BrokenChain {
                        chain: index,
                        link: position,
                    },
                ));
            }
        }

        let mut repeated: Vec<(DominoId, usize)> =
            uses.into_iter().filter(|(_, n)| *n > 1).collect();
        repeated.sort_by_key(|(id, _)| id.to_string());
        checks.extend(repeated.into_iter().map(|(id, count)| {
            Validation::fail(SnapshotIssue::RepeatedChainDomino {
                id: id.to_string(),
                count,
            })
        }));

        for domino in &self.dominos {
            let chained = self.chains.iter().any(|c| c.contains(domino.id));
            checks.push(check(domino.in_chain == chained, || {
                SnapshotIssue::InChainMismatch {
                    id: domino.id.to_string(),
                }
            }));
        }

        checks
    }
}
