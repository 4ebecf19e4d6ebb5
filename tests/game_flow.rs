//! End-to-end play through the public API.
//!
//! Builds a tableau whose pairs, taken in order, form thirteen dominos that
//! close into a single loop, then plays it to a win.

use domino_solitaire::config::GameConfig;
use domino_solitaire::core::{
    check_win, total_chain_length, Card, GameState, Rank, Suit, DECK_SIZE, MAX_PAIRS,
};
use domino_solitaire::snapshot::{restore_or_deal, Snapshot};

/// Labels at each junction of the winning loop, by lower rank.
const JUNCTIONS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
];

fn complement(rank: Rank) -> Rank {
    Rank::ALL[(13 - rank.value()) as usize]
}

/// Hearts/clubs pair for a label; `copy` picks which of the two.
fn hearts_clubs(low: Rank, copy: usize) -> [Card; 2] {
    if copy == 0 {
        [Card::new(low, Suit::Hearts), Card::new(complement(low), Suit::Clubs)]
    } else {
        [Card::new(low, Suit::Clubs), Card::new(complement(low), Suit::Hearts)]
    }
}

/// Diamonds/spades pair for a label; `copy` picks which of the two.
fn diamonds_spades(low: Rank, copy: usize) -> [Card; 2] {
    if copy == 0 {
        [Card::new(low, Suit::Diamonds), Card::new(complement(low), Suit::Spades)]
    } else {
        [Card::new(low, Suit::Spades), Card::new(complement(low), Suit::Diamonds)]
    }
}

/// Pairs in play order: two per domino.
fn winning_pairs() -> Vec<[Card; 2]> {
    (0..JUNCTIONS.len())
        .flat_map(|i| {
            let copy = if i <= 6 { 0 } else { 1 };
            let next = JUNCTIONS[(i + 1) % JUNCTIONS.len()];
            [
                hearts_clubs(JUNCTIONS[i], copy),
                diamonds_spades(next, copy),
            ]
        })
        .collect()
}

/// Column 0 holds the first card of each pair, column 1 the second, with
/// the first pair on top.
fn winnable_game() -> GameState {
    let pairs = winning_pairs();
    let mut tableau = vec![Vec::new(); 8];
    for [a, b] in pairs.iter().rev() {
        tableau[0].push(*a);
        tableau[1].push(*b);
    }
    GameState::new(tableau)
}

fn play_to_win(mut game: GameState) -> GameState {
    for _ in 0..JUNCTIONS.len() {
        game = game.create_pair_from_tableau(0, 1);
        game = game.create_pair_from_tableau(0, 1);
        game = game.create_domino_from_pairs(0, 1);
        let newest = game.dominos.len() - 1;
        game = game.add_domino_to_chain(newest, Some(0));
    }
    game
}

#[test]
fn scripted_deal_uses_every_card_once() {
    let game = winnable_game();
    assert_eq!(game.card_count(), DECK_SIZE);

    let mut ids: Vec<String> = game.tableau.iter().flatten().map(Card::id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), DECK_SIZE);
}

#[test]
fn full_game_reaches_a_win() {
    let won = play_to_win(winnable_game());

    assert!(won.tableau.iter().all(Vec::is_empty));
    assert!(won.pairs.is_empty());
    assert_eq!(won.dominos.len(), 13);
    assert!(won.dominos.iter().all(|d| d.in_chain));
    assert_eq!(won.chains.len(), 1);
    assert_eq!(total_chain_length(&won.chains), 13);
    assert!(won.chains[0].is_circular());
    assert!(check_win(&won.chains));
    assert!(won.is_won());
    assert_eq!(won.move_count, 52);
    assert_eq!(won.card_count(), DECK_SIZE);
}

#[test]
fn history_is_capped_during_a_long_game() {
    let won = play_to_win(winnable_game());
    assert_eq!(won.history.len(), 50);
    assert_eq!(won.history.entries().next().unwrap().move_count, 2);
}

#[test]
fn undoing_the_last_link_breaks_the_win() {
    let won = play_to_win(winnable_game());
    let undone = won.undo();

    assert!(!undone.is_won());
    assert_eq!(undone.chains[0].len(), 12);
    assert_eq!(undone.available_dominos().count(), 1);
    assert_eq!(undone.move_count, 51);
}

#[test]
fn removing_a_link_and_replacing_it_wins_again() {
    let won = play_to_win(winnable_game());
    let broken = won.remove_last_from_chain(0);
    assert!(!broken.is_won());

    let last = broken
        .dominos
        .iter()
        .position(|d| !d.in_chain)
        .unwrap();
    let fixed = broken.add_domino_to_chain(last, None);
    assert!(fixed.is_won());
}

#[test]
fn pair_pool_caps_at_six() {
    let mut game = winnable_game();
    for _ in 0..MAX_PAIRS {
        game = game.create_pair_from_tableau(0, 1);
    }
    assert_eq!(game.pairs.len(), MAX_PAIRS);

    let blocked = game.create_pair_from_tableau(0, 1);
    assert_eq!(blocked, game);
}

#[test]
fn won_game_survives_a_snapshot_round_trip() {
    let config = GameConfig::default();
    let won = play_to_win(winnable_game());

    let json = won.snapshot().to_json().unwrap();
    let restored = restore_or_deal(Some(&json), &config);
    assert!(restored.is_won());
    assert_eq!(restored.chains, won.chains);
    assert!(restored.history.is_empty());

    let bytes = won.snapshot().to_bytes().unwrap();
    let from_bytes = Snapshot::from_bytes(&bytes)
        .unwrap()
        .into_state(&config)
        .unwrap();
    assert_eq!(from_bytes.dominos, won.dominos);
}
