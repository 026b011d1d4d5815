//! Game configuration options.

use core::time::Duration;

/// Difficulty preset controlling the board grid.
///
/// Each tier maps to a fixed grid of columns by rows with one card per
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Difficulty {
    /// 4 x 3 grid, 12 cards.
    #[default]
    Easy,
    /// 6 x 4 grid, 24 cards.
    Medium,
    /// 8 x 5 grid, 40 cards.
    Hard,
}

impl Difficulty {
    /// Returns the number of grid columns.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Medium => 6,
            Self::Hard => 8,
        }
    }

    /// Returns the number of grid rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::Easy => 3,
            Self::Medium => 4,
            Self::Hard => 5,
        }
    }

    /// Returns the number of cards on the board (columns times rows).
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.card_count(), 12);
    /// assert_eq!(Difficulty::Hard.card_count(), 40);
    /// ```
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.columns() * self.rows()
    }
}

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use memrs::{Difficulty, GameOptions};
///
/// let options = GameOptions::default()
///     .with_difficulty(Difficulty::Medium)
///     .with_hide_delay(Duration::from_millis(1500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of cards on the board. Must be even and within `2..=52`.
    pub board_size: usize,
    /// How long a mismatched pair stays face up before its flip-back
    /// should fire. Carried into [`PendingHide`]; the engine does no
    /// scheduling itself.
    ///
    /// [`PendingHide`]: crate::PendingHide
    pub hide_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            board_size: Difficulty::Easy.card_count(),
            hide_delay: Duration::from_secs(2),
        }
    }
}

impl GameOptions {
    /// Sets the board size directly.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_board_size(16);
    /// assert_eq!(options.board_size, 16);
    /// ```
    #[must_use]
    pub const fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Sets the board size from a difficulty preset.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{Difficulty, GameOptions};
    ///
    /// let options = GameOptions::default().with_difficulty(Difficulty::Hard);
    /// assert_eq!(options.board_size, 40);
    /// ```
    #[must_use]
    pub const fn with_difficulty(self, difficulty: Difficulty) -> Self {
        self.with_board_size(difficulty.card_count())
    }

    /// Sets how long mismatched pairs stay face up.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use memrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hide_delay(Duration::from_secs(1));
    /// assert_eq!(options.hide_delay, Duration::from_secs(1));
    /// ```
    #[must_use]
    pub const fn with_hide_delay(mut self, hide_delay: Duration) -> Self {
        self.hide_delay = hide_delay;
        self
    }
}
