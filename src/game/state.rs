//! Session state types.

use core::time::Duration;

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No cards are face up; waiting for the first pick of a turn.
    Idle,
    /// One card is face up, waiting for its partner.
    OneSelected,
    /// A mismatched pair is face up, waiting for the pending hide to
    /// fire.
    Resolving,
    /// Every pair has been found. Terminal.
    Won,
}

/// Token identifying one pending hide.
///
/// A fresh token is minted per mismatch, and [`conceal_mismatch`] accepts
/// only the token of the currently pending hide. A late timer callback
/// left over from an earlier turn therefore cannot disturb the session.
///
/// [`conceal_mismatch`]: super::Game::conceal_mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HideToken(pub(crate) u64);

/// A scheduled flip-back of a mismatched pair.
///
/// The engine performs no scheduling. The caller receives this value in a
/// [`Mismatched`] outcome, waits `delay` using whatever timer facility it
/// owns, then passes `token` back to [`conceal_mismatch`].
///
/// [`Mismatched`]: crate::TurnOutcome::Mismatched
/// [`conceal_mismatch`]: super::Game::conceal_mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingHide {
    /// The two mismatched board positions, in selection order.
    pub positions: [usize; 2],
    /// How long the pair stays face up before the hide should fire.
    pub delay: Duration,
    /// Token to pass back to [`conceal_mismatch`].
    ///
    /// [`conceal_mismatch`]: super::Game::conceal_mismatch
    pub token: HideToken,
}
