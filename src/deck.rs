//! The deck value type and board construction.

use alloc::vec::Vec;
use core::ops::{Add, Index};

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered sequence of cards.
///
/// Order is meaningful: it is board position or draw order. Every
/// transformation returns a new `Deck` and leaves the receiver untouched,
/// so decks can be shared, compared, and replayed freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full 52-card deck in canonical order.
    ///
    /// Generation is rank-major: the four suits of the Ace, then the four
    /// suits of the Two, and so on through the King. Within a rank the
    /// suits run spades, hearts, clubs, diamonds.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::Deck;
    ///
    /// let deck = Deck::full();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck[0].label(), "ace_of_spades");
    /// assert_eq!(deck[51].label(), "king_of_diamonds");
    /// ```
    #[must_use]
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Returns a new deck with the same cards in uniformly random order.
    ///
    /// Uses the unbiased Fisher-Yates shuffle from [`SliceRandom`]. Pass a
    /// seeded RNG to make the permutation reproducible.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Returns a new deck holding the first `n` cards, order preserved.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the deck's length.
    #[must_use]
    pub fn take(&self, n: usize) -> Self {
        assert!(
            n <= self.cards.len(),
            "cannot take {n} cards from a deck of {}",
            self.cards.len()
        );
        Self {
            cards: self.cards[..n].to_vec(),
        }
    }

    /// Builds a board deck of `size` cards: `size / 2` randomly chosen
    /// distinct cards, each present exactly twice, at uniformly random
    /// positions.
    ///
    /// The full deck is shuffled, the first `size / 2` cards are taken and
    /// shuffled again, and the half-board concatenated with itself is
    /// shuffled once more so pair positions carry no construction bias.
    ///
    /// # Panics
    ///
    /// Panics unless `size` is even and within `2..=52`. [`Game::new`]
    /// checks the same bounds and reports them as errors instead.
    ///
    /// [`Game::new`]: crate::Game::new
    #[must_use]
    pub fn board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        assert!(size % 2 == 0, "board size must be even, got {size}");
        assert!(
            (2..=DECK_SIZE).contains(&size),
            "board size must be within 2..=52, got {size}"
        );

        let half = Self::full().shuffled(rng).take(size / 2).shuffled(rng);
        (half.clone() + half).shuffled(rng)
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards as a slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

/// Concatenation: the left deck's cards followed by the right deck's.
impl Add for Deck {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.cards.extend(rhs.cards);
        self
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
