//! Card types: ranks, suits, and canonical labels.

use alloc::string::String;
use core::fmt;

/// Card rank.
///
/// Discriminants follow the classic ordering: Ace is 1, number cards carry
/// their face value, Jack through King are 11 to 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Ace (ordinal 1).
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack (ordinal 11).
    Jack,
    /// Queen (ordinal 12).
    Queen,
    /// King (ordinal 13).
    King,
}

impl Rank {
    /// All thirteen ranks in generation order, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the 1-based ordinal (Ace = 1, King = 13).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name used in card labels.
    ///
    /// Face cards and the Ace use words, number cards use digits.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All four suits in generation order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the lowercase name used in card labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards compare by rank and suit, so the two copies of a card on a
/// concentration board are equal to each other and to nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the canonical `"<rank>_of_<suit>"` label.
    ///
    /// The label uniquely identifies a card and doubles as an artwork
    /// lookup key for presentation layers.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Rank::Ace, Suit::Spades).label(), "ace_of_spades");
    /// assert_eq!(Card::new(Rank::Ten, Suit::Hearts).label(), "10_of_hearts");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_of_{}", self.rank, self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
