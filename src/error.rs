//! Error types for game construction.

use thiserror::Error;

/// Errors that can occur when creating a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// Board size is odd; cards come in pairs.
    #[error("board size must be even")]
    OddCardCount,
    /// Board holds fewer than one pair.
    #[error("board must hold at least one pair")]
    BoardTooSmall,
    /// Board needs more cards than one 52-card deck provides.
    #[error("board cannot hold more than 52 cards")]
    BoardTooLarge,
    /// A supplied board has a card that does not appear exactly twice.
    #[error("every card on the board must appear exactly twice")]
    UnpairedBoard,
}
