//! A concentration (memory) card-matching game engine with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] session that owns a board of paired,
//! face-down playing cards and resolves one selection at a time: reveal,
//! match, mismatch, win. Mismatched pairs flip back through an explicit
//! [`PendingHide`] value that the caller fires once its own timer
//! elapses, so the engine never schedules anything itself.
//!
//! # Example
//!
//! ```
//! use memrs::{Game, GameOptions, TurnOutcome};
//!
//! let mut game = Game::new(GameOptions::default(), 42)?;
//!
//! assert_eq!(game.select(0), TurnOutcome::Revealed);
//! match game.select(1) {
//!     TurnOutcome::Matched { .. } | TurnOutcome::Won { .. } => {}
//!     TurnOutcome::Mismatched { hide, .. } => {
//!         // A real caller waits `hide.delay` before firing this.
//!         game.conceal_mismatch(hide.token);
//!     }
//!     outcome => panic!("unexpected outcome: {outcome:?}"),
//! }
//! # Ok::<(), memrs::NewGameError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::NewGameError;
pub use game::{Game, GameState, HideToken, PendingHide};
pub use options::{Difficulty, GameOptions};
pub use result::TurnOutcome;
