//! The game session and its turn state machine.

use alloc::vec;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::NewGameError;
use crate::options::GameOptions;

mod actions;
pub mod state;

pub use state::{GameState, HideToken, PendingHide};

/// A concentration game session.
///
/// The session owns the board deck and the turn state machine. It is a
/// single-owner value: all mutation goes through [`select`] and
/// [`conceal_mismatch`] on `&mut self`, so state cannot change behind the
/// caller's back between a read and the next move. Callers that share a
/// session across threads wrap it in their own lock.
///
/// [`select`]: Game::select
/// [`conceal_mismatch`]: Game::conceal_mismatch
#[derive(Debug, Clone)]
pub struct Game {
    /// Board deck, fixed for the whole session.
    board: Deck,
    /// Currently selected positions, oldest first (at most two).
    selected: Vec<usize>,
    /// Per-position removed flags; a removed position is permanently
    /// inert.
    removed: Vec<bool>,
    /// Confirmed pairs found so far.
    pairs_found: usize,
    /// Mismatch counter, doubling as the score. Lower is better.
    score: u32,
    /// The flip-back a mismatch left behind, if any.
    pending: Option<PendingHide>,
    /// Source of hide tokens, bumped once per mismatch.
    next_token: u64,
    /// Session options.
    options: GameOptions,
}

impl Game {
    /// Creates a new session with a freshly shuffled board.
    ///
    /// The board holds `options.board_size` cards: half that many
    /// distinct cards, each placed twice at uniformly random positions.
    /// The same seed always produces the same board.
    ///
    /// # Errors
    ///
    /// Returns an error if `options.board_size` is odd, smaller than one
    /// pair, or larger than the 52-card deck allows.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.board().len(), 12);
    /// assert_eq!(game.total_pairs(), 6);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, NewGameError> {
        validate_board_size(options.board_size)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let board = Deck::board(options.board_size, &mut rng);

        Ok(Self::from_board(board, options))
    }

    /// Creates a session over an explicit board layout.
    ///
    /// Useful for tests and replays where the exact card positions
    /// matter. The board's length takes precedence over
    /// `options.board_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if the board size is odd or out of range, or if
    /// any card does not appear exactly twice.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{Card, Deck, Game, GameOptions, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let king = Card::new(Rank::King, Suit::Diamonds);
    /// let board = Deck::from(vec![ace, ace, king, king]);
    /// let game = Game::with_board(board, GameOptions::default()).unwrap();
    /// assert_eq!(game.total_pairs(), 2);
    /// ```
    pub fn with_board(board: Deck, options: GameOptions) -> Result<Self, NewGameError> {
        validate_board_size(board.len())?;

        // An unpaired card would leave the board unwinnable.
        for card in board.cards() {
            let copies = board.cards().iter().filter(|other| *other == card).count();
            if copies != 2 {
                return Err(NewGameError::UnpairedBoard);
            }
        }

        Ok(Self::from_board(board, options))
    }

    fn from_board(board: Deck, options: GameOptions) -> Self {
        let positions = board.len();
        Self {
            board,
            selected: Vec::with_capacity(2),
            removed: vec![false; positions],
            pairs_found: 0,
            score: 0,
            pending: None,
            next_token: 0,
            options,
        }
    }

    /// Returns the board deck.
    ///
    /// The deck never changes over a session; matched cards are marked
    /// removed rather than taken out of it, so positions stay stable.
    #[must_use]
    pub const fn board(&self) -> &Deck {
        &self.board
    }

    /// Returns the card at the given board position.
    ///
    /// Works for removed positions too, which lets a presentation layer
    /// keep rendering a match animation after the pair left the board.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the board.
    #[must_use]
    pub fn card_at(&self, position: usize) -> Card {
        self.board[position]
    }

    /// Returns whether the card at `position` is currently face up.
    ///
    /// Removed cards are off the board and report `false`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the board.
    #[must_use]
    pub fn is_face_up(&self, position: usize) -> bool {
        assert!(
            position < self.board.len(),
            "position {position} outside the board"
        );
        self.selected.contains(&position)
    }

    /// Returns whether the pair at `position` has been matched and
    /// removed.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the board.
    #[must_use]
    pub fn is_removed(&self, position: usize) -> bool {
        self.removed[position]
    }

    /// Returns the current score: the number of mismatched attempts.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of confirmed pairs found so far.
    #[must_use]
    pub const fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    /// Returns the total number of pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board.len() / 2
    }

    /// Returns whether every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.pairs_found == self.total_pairs()
    }

    /// Returns the current session state.
    ///
    /// The state is derived from the session fields on demand, so it can
    /// never drift from them.
    #[must_use]
    pub fn state(&self) -> GameState {
        if self.is_won() {
            GameState::Won
        } else if self.pending.is_some() {
            GameState::Resolving
        } else if self.selected.is_empty() {
            GameState::Idle
        } else {
            GameState::OneSelected
        }
    }

    /// Returns the pending hide, if a mismatch is awaiting its flip-back.
    #[must_use]
    pub const fn pending_hide(&self) -> Option<PendingHide> {
        self.pending
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> GameOptions {
        self.options
    }
}

const fn validate_board_size(size: usize) -> Result<(), NewGameError> {
    if size % 2 != 0 {
        return Err(NewGameError::OddCardCount);
    }
    if size < 2 {
        return Err(NewGameError::BoardTooSmall);
    }
    if size > DECK_SIZE {
        return Err(NewGameError::BoardTooLarge);
    }
    Ok(())
}
