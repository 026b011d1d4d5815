//! Turn outcome types.

use crate::game::PendingHide;

/// Outcome of a single board selection.
///
/// Every call to [`Game::select`] answers with exactly one of these;
/// presentation layers drive their reveal, removal, and hide effects off
/// the outcome.
///
/// [`Game::select`]: crate::Game::select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The selection changed nothing: the position was out of range,
    /// already removed, already face up, picked while a mismatch was
    /// still resolving, or the game was already won.
    Ignored,
    /// The first card of a turn was turned face up.
    Revealed,
    /// The second card completed a pair; both positions left the board.
    Matched {
        /// Pairs still hidden after this match.
        pairs_remaining: usize,
    },
    /// The second card did not match; both stay face up until the hide
    /// fires.
    Mismatched {
        /// Mismatch count so far. Lower is better.
        score: u32,
        /// The flip-back the caller is responsible for firing.
        hide: PendingHide,
    },
    /// The final pair was found; the game is over.
    Won {
        /// Final score: the total number of mismatched attempts.
        score: u32,
    },
}
