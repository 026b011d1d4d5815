//! Game integration tests.

use core::time::Duration;
use std::collections::HashMap;

use memrs::{
    Card, DECK_SIZE, Deck, Difficulty, Game, GameOptions, GameState, NewGameError, Rank, Suit,
    TurnOutcome,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Board layout `[A♠, A♠, K♦, K♦]`: pairs sit side by side, so every
/// turn's result is forced.
fn forced_two_pair_game() -> Game {
    let board = Deck::from(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
        card(Rank::King, Suit::Diamonds),
    ]);
    Game::with_board(board, GameOptions::default()).unwrap()
}

#[test]
fn full_deck_is_canonical() {
    let deck = Deck::full();
    assert_eq!(deck.len(), DECK_SIZE);

    // Rank-major generation: all four aces first, spades leading.
    assert_eq!(deck[0].label(), "ace_of_spades");
    assert_eq!(deck[1].label(), "ace_of_hearts");
    assert_eq!(deck[2].label(), "ace_of_clubs");
    assert_eq!(deck[3].label(), "ace_of_diamonds");
    assert_eq!(deck[4].label(), "2_of_spades");
    assert_eq!(deck[51].label(), "king_of_diamonds");

    let mut labels: Vec<String> = deck.cards().iter().map(|c| c.label()).collect();
    labels.sort();
    labels.dedup();
    assert_eq!(labels.len(), DECK_SIZE);

    assert_eq!(deck.get(0), Some(&deck[0]));
    assert!(deck.get(DECK_SIZE).is_none());
}

#[test]
fn ranks_and_suits_render_lowercase_names() {
    assert_eq!(Rank::Ace.name(), "ace");
    assert_eq!(Rank::Ten.name(), "10");
    assert_eq!(Rank::Queen.name(), "queen");
    assert_eq!(Rank::Ace.ordinal(), 1);
    assert_eq!(Rank::King.ordinal(), 13);
    assert_eq!(Suit::Clubs.name(), "clubs");

    assert_eq!(card(Rank::Ten, Suit::Hearts).label(), "10_of_hearts");
    assert_eq!(card(Rank::Two, Suit::Clubs).to_string(), "2_of_clubs");
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let deck = Deck::full();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let shuffled = deck.shuffled(&mut rng);

    assert_eq!(shuffled.len(), deck.len());
    // The source deck is untouched.
    assert_eq!(deck, Deck::full());

    let mut before: Vec<String> = deck.cards().iter().map(|c| c.label()).collect();
    let mut after: Vec<String> = shuffled.cards().iter().map(|c| c.label()).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn shuffle_has_no_position_bias() {
    let deck = Deck::full();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut first_card_counts: HashMap<String, u32> = HashMap::new();

    let trials = 2600;
    for _ in 0..trials {
        let shuffled = deck.shuffled(&mut rng);
        *first_card_counts.entry(shuffled[0].label()).or_insert(0) += 1;
    }

    // Expected count is 50 per card; a generous band still catches a
    // shuffle that pins or starves positions.
    assert_eq!(first_card_counts.len(), DECK_SIZE);
    for (label, count) in &first_card_counts {
        assert!(
            (10..=120).contains(count),
            "card {label} landed first {count} times over {trials} trials"
        );
    }
}

#[test]
fn take_then_self_concat_doubles_the_count() {
    let deck = Deck::full();
    let half = deck.take(5);
    assert_eq!(half.len(), 5);
    assert_eq!(half[0], deck[0]);
    assert_eq!(half[4], deck[4]);

    let doubled = half.clone() + half;
    assert_eq!(doubled.len(), 10);
    assert_eq!(doubled[0], doubled[5]);
    assert_eq!(doubled[4], doubled[9]);
}

#[test]
#[should_panic(expected = "cannot take")]
fn take_past_the_end_panics() {
    let _ = Deck::full().take(53);
}

#[test]
fn board_decks_hold_each_card_exactly_twice() {
    for size in [4, 12, 24, 40, 52] {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let board = Deck::board(size, &mut rng);
        assert_eq!(board.len(), size);

        let mut labels: Vec<String> = board.cards().iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), size / 2);

        for c in board.cards() {
            let copies = board.cards().iter().filter(|other| *other == c).count();
            assert_eq!(copies, 2, "card {} appears {copies} times", c.label());
        }
    }
}

#[test]
fn new_game_validates_board_size() {
    let odd = GameOptions::default().with_board_size(7);
    assert_eq!(Game::new(odd, 1).unwrap_err(), NewGameError::OddCardCount);

    let empty = GameOptions::default().with_board_size(0);
    assert_eq!(Game::new(empty, 1).unwrap_err(), NewGameError::BoardTooSmall);

    let oversized = GameOptions::default().with_board_size(54);
    assert_eq!(
        Game::new(oversized, 1).unwrap_err(),
        NewGameError::BoardTooLarge
    );

    assert!(Game::new(GameOptions::default(), 1).is_ok());
}

#[test]
fn with_board_rejects_unpaired_cards() {
    let board = Deck::from(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Queen, Suit::Hearts),
    ]);
    assert_eq!(
        Game::with_board(board, GameOptions::default()).unwrap_err(),
        NewGameError::UnpairedBoard
    );

    let quadruplet = Deck::from(vec![card(Rank::Two, Suit::Clubs); 4]);
    assert_eq!(
        Game::with_board(quadruplet, GameOptions::default()).unwrap_err(),
        NewGameError::UnpairedBoard
    );
}

#[test]
fn perfect_game_on_a_forced_board() {
    let mut game = forced_two_pair_game();
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.total_pairs(), 2);

    assert_eq!(game.select(0), TurnOutcome::Revealed);
    assert_eq!(game.state(), GameState::OneSelected);
    assert!(game.is_face_up(0));
    assert!(!game.is_face_up(1));

    assert_eq!(game.select(1), TurnOutcome::Matched { pairs_remaining: 1 });
    assert!(game.is_removed(0));
    assert!(game.is_removed(1));
    assert!(!game.is_face_up(0));
    assert_eq!(game.pairs_found(), 1);
    assert_eq!(game.state(), GameState::Idle);

    assert_eq!(game.select(2), TurnOutcome::Revealed);
    assert_eq!(game.select(3), TurnOutcome::Won { score: 0 });
    assert!(game.is_won());
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.score(), 0);
    assert_eq!(game.pairs_found(), 2);
}

#[test]
fn mismatch_stays_face_up_until_the_hide_fires() {
    let mut game = forced_two_pair_game();

    assert_eq!(game.select(0), TurnOutcome::Revealed);
    let outcome = game.select(2);
    let TurnOutcome::Mismatched { score, hide } = outcome else {
        panic!("expected a mismatch, got {outcome:?}");
    };
    assert_eq!(score, 1);
    assert_eq!(hide.positions, [0, 2]);
    assert_eq!(hide.delay, Duration::from_secs(2));
    assert_eq!(game.state(), GameState::Resolving);
    assert_eq!(game.pending_hide(), Some(hide));
    assert!(game.is_face_up(0));
    assert!(game.is_face_up(2));

    // The board is blocked until the hide fires.
    assert_eq!(game.select(1), TurnOutcome::Ignored);
    assert_eq!(game.select(3), TurnOutcome::Ignored);

    assert!(game.conceal_mismatch(hide.token));
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.pending_hide(), None);
    assert!(!game.is_face_up(0));
    assert!(!game.is_face_up(2));
    assert_eq!(game.score(), 1);

    // Both positions are selectable again.
    assert_eq!(game.select(0), TurnOutcome::Revealed);
}

#[test]
fn reselecting_the_same_position_is_ignored() {
    let mut game = forced_two_pair_game();

    assert_eq!(game.select(0), TurnOutcome::Revealed);
    assert_eq!(game.select(0), TurnOutcome::Ignored);
    assert_eq!(game.state(), GameState::OneSelected);
    assert_eq!(game.score(), 0);
}

#[test]
fn out_of_range_and_removed_positions_are_ignored() {
    let mut game = forced_two_pair_game();

    assert_eq!(game.select(4), TurnOutcome::Ignored);
    assert_eq!(game.select(99), TurnOutcome::Ignored);
    assert_eq!(game.state(), GameState::Idle);

    game.select(0);
    game.select(1);
    assert!(game.is_removed(0));

    assert_eq!(game.select(0), TurnOutcome::Ignored);
    assert_eq!(game.select(1), TurnOutcome::Ignored);
    assert_eq!(game.state(), GameState::Idle);
}

#[test]
fn selections_after_the_win_are_ignored() {
    let mut game = forced_two_pair_game();
    game.select(0);
    game.select(1);
    game.select(2);
    assert_eq!(game.select(3), TurnOutcome::Won { score: 0 });

    for position in [0, 1, 2, 3, 99] {
        assert_eq!(game.select(position), TurnOutcome::Ignored);
    }
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.score(), 0);
}

#[test]
fn stale_hide_tokens_are_ignored() {
    let board = Deck::from(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Queen, Suit::Hearts),
    ]);
    let mut game = Game::with_board(board, GameOptions::default()).unwrap();

    game.select(0);
    let TurnOutcome::Mismatched {
        hide: first_hide, ..
    } = game.select(2)
    else {
        panic!("expected a mismatch");
    };
    assert!(game.conceal_mismatch(first_hide.token));
    // Firing the same hide twice is a no-op.
    assert!(!game.conceal_mismatch(first_hide.token));
    assert_eq!(game.state(), GameState::Idle);

    game.select(0);
    let TurnOutcome::Mismatched {
        hide: second_hide, ..
    } = game.select(4)
    else {
        panic!("expected a mismatch");
    };
    // The old token cannot cancel the new hide.
    assert!(!game.conceal_mismatch(first_hide.token));
    assert_eq!(game.state(), GameState::Resolving);

    assert!(game.conceal_mismatch(second_hide.token));
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(game.score(), 2);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let a = Game::new(GameOptions::default(), 1234).unwrap();
    let b = Game::new(GameOptions::default(), 1234).unwrap();
    assert_eq!(a.board(), b.board());

    let c = Game::new(GameOptions::default(), 4321).unwrap();
    assert_ne!(a.board(), c.board());
}

#[test]
fn playing_a_shuffled_board_to_completion() {
    let options = GameOptions::default().with_difficulty(Difficulty::Medium);
    let mut game = Game::new(options, 99).unwrap();
    let total = game.total_pairs();

    // Pair up positions by card label, then play them in order.
    let mut partners: HashMap<String, usize> = HashMap::new();
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for position in 0..game.board().len() {
        let label = game.card_at(position).label();
        if let Some(first) = partners.remove(&label) {
            pairs.push((first, position));
        } else {
            partners.insert(label, position);
        }
    }
    assert_eq!(pairs.len(), total);

    for (index, (first, second)) in pairs.iter().enumerate() {
        assert_eq!(game.select(*first), TurnOutcome::Revealed);
        let expected = if index + 1 == total {
            TurnOutcome::Won { score: 0 }
        } else {
            TurnOutcome::Matched {
                pairs_remaining: total - index - 1,
            }
        };
        assert_eq!(game.select(*second), expected);
    }

    assert!(game.is_won());
    assert_eq!(game.score(), 0);
    assert_eq!(game.pairs_found(), total);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_board_size(16)
        .with_hide_delay(Duration::from_millis(500));
    assert_eq!(options.board_size, 16);
    assert_eq!(options.hide_delay, Duration::from_millis(500));

    let preset = GameOptions::default().with_difficulty(Difficulty::Medium);
    assert_eq!(preset.board_size, 24);

    let defaults = GameOptions::default();
    assert_eq!(defaults.board_size, 12);
    assert_eq!(defaults.hide_delay, Duration::from_secs(2));
}

#[test]
fn difficulty_grids_match_their_board_sizes() {
    assert_eq!((Difficulty::Easy.columns(), Difficulty::Easy.rows()), (4, 3));
    assert_eq!(
        (Difficulty::Medium.columns(), Difficulty::Medium.rows()),
        (6, 4)
    );
    assert_eq!((Difficulty::Hard.columns(), Difficulty::Hard.rows()), (8, 5));

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(
            difficulty.card_count(),
            difficulty.columns() * difficulty.rows()
        );
        let game = Game::new(GameOptions::default().with_difficulty(difficulty), 5).unwrap();
        assert_eq!(game.board().len(), difficulty.card_count());
    }
}

#[test]
fn hide_delay_is_carried_into_the_pending_hide() {
    let options = GameOptions::default().with_hide_delay(Duration::from_millis(750));
    let board = Deck::from(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
        card(Rank::King, Suit::Diamonds),
    ]);
    let mut game = Game::with_board(board, options).unwrap();
    assert_eq!(game.options().hide_delay, Duration::from_millis(750));

    game.select(0);
    let TurnOutcome::Mismatched { hide, .. } = game.select(3) else {
        panic!("expected a mismatch");
    };
    assert_eq!(hide.delay, Duration::from_millis(750));
    assert_eq!(game.pending_hide().map(|pending| pending.token), Some(hide.token));
}
