//! Hand representation and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// An ordered, append-only collection of cards held by one participant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    /// Cards in the hand, in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a drawn card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Calculates the best blackjack value of the hand.
    ///
    /// Aces count as 11, then are demoted to 1 one at a time while the
    /// total exceeds 21 and an undemoted Ace remains. The result depends
    /// only on the multiset of ranks, not on draw order. A hand whose
    /// Aces are all demoted can still total over 21; that is a valid
    /// (busted) score, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, Hand, Rank, Suit};
    ///
    /// let hand: Hand = vec![
    ///     Card::new(Suit::Spades, Rank::King),
    ///     Card::new(Suit::Hearts, Rank::Ace),
    /// ]
    /// .into();
    /// assert_eq!(hand.score(), 21);
    /// ```
    #[must_use]
    pub fn score(&self) -> u8 {
        let mut total: u8 = 0;
        let mut aces: u8 = 0;

        for card in &self.cards {
            if card.rank.is_ace() {
                aces += 1;
            }
            total = total.saturating_add(card.rank.value());
        }

        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
        }

        total
    }

    /// Returns whether the hand is a blackjack (two cards totalling 21).
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == 21
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
