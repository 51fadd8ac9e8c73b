//! Deck construction and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered draw pile of cards.
///
/// A deck is a plain value: drawing returns the drawn card together with a
/// new deck holding the remainder, leaving the original untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in the pile. The last element is the top of the pile.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in a fixed deterministic order.
    ///
    /// Suits form the outer loop and ranks the inner loop, so every
    /// (suit, rank) pair appears exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Consumes the deck and returns a shuffled permutation of it.
    ///
    /// Every card of the input appears exactly once in the output.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.cards.shuffle(rng);
        self
    }

    /// Draws the top card, returning it with the remaining deck.
    ///
    /// The top of the pile is the last card in the sequence. The deck this
    /// is called on is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn take(&self) -> Result<(Card, Self), DeckError> {
        let (card, remaining) = self.cards.split_last().ok_or(DeckError::Exhausted)?;
        Ok((
            *card,
            Self {
                cards: remaining.to_vec(),
            },
        ))
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
