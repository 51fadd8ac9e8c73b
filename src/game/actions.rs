use crate::error::ActionError;

use super::dealer;
use super::{GameState, Turn};

impl GameState {
    /// Player action: Hit (draw a card).
    ///
    /// Draws the top card of the pile and appends it to the player's hand.
    /// The turn does not change, so the player may keep hitting; the
    /// controlling layer stops offering hits once the player's score
    /// exceeds 21.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the draw pile
    /// is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        if self.turn != Turn::Player {
            return Err(ActionError::OutOfTurn);
        }

        let (card, remaining) = self.deck.take()?;
        let mut player_hand = self.player_hand.clone();
        player_hand.push(card);

        Ok(Self {
            player_hand,
            dealer_hand: self.dealer_hand.clone(),
            deck: remaining,
            turn: self.turn,
        })
    }

    /// Player action: Stand (end the player's turn).
    ///
    /// The dealer draws from the pile until reaching 17 or higher, then
    /// the turn moves to the dealer and the round is over.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the draw pile
    /// runs out while the dealer must draw. Exhaustion is unreachable in
    /// a normally dealt round: the dealer stops at 17, which a 48-card
    /// pile cannot fail to supply.
    pub fn stand(&self) -> Result<Self, ActionError> {
        if self.turn != Turn::Player {
            return Err(ActionError::OutOfTurn);
        }

        let (dealer_hand, deck) = dealer::play_out(self.dealer_hand.clone(), self.deck.clone())?;

        Ok(Self {
            player_hand: self.player_hand.clone(),
            dealer_hand,
            deck,
            turn: Turn::Dealer,
        })
    }
}
