//! Round state and transitions.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use state::Turn;

/// The full state of one blackjack round.
///
/// The player hand, dealer hand, and draw pile always partition the same
/// 52 cards. Transitions never mutate an existing state; they build and
/// return a fresh value, so the holder replaces its state wholesale on
/// each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The player's hand.
    pub player_hand: Hand,
    /// The dealer's hand.
    pub dealer_hand: Hand,
    /// The remaining draw pile.
    pub deck: Deck,
    /// Whose action is currently permitted.
    pub turn: Turn,
}

impl GameState {
    /// Deals a fresh round from a seeded RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{GameState, Turn};
    ///
    /// let state = GameState::new(42);
    /// assert_eq!(state.player_hand.len(), 2);
    /// assert_eq!(state.dealer_hand.len(), 2);
    /// assert_eq!(state.turn, Turn::Player);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::deal(&mut rng)
    }

    /// Shuffles a full deck and deals two cards each to player and dealer.
    ///
    /// Cards come off the top of the pile (the end of the shuffled
    /// sequence): the player is served first, the dealer next, and the
    /// remaining 48 cards form the draw pile. The round starts on the
    /// player's turn.
    #[must_use]
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let shuffled = Deck::standard().shuffled(rng);
        // A standard deck always holds 52 cards, so these ranges exist.
        let cards = shuffled.cards();
        let player_hand = cards[DECK_SIZE - 2..].iter().copied().collect();
        let dealer_hand = cards[DECK_SIZE - 4..DECK_SIZE - 2].iter().copied().collect();
        let deck = Deck::from(cards[..DECK_SIZE - 4].to_vec());

        Self {
            player_hand,
            dealer_hand,
            deck,
            turn: Turn::Player,
        }
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
