use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::Hand;

/// The dealer stands once this total is reached.
const DEALER_STAND: u8 = 17;

/// Plays out the dealer's hand against the draw pile.
///
/// Each iteration draws a fresh top card and appends it to the hand; the
/// loop stops as soon as the hand scores 17 or higher.
pub(super) fn play_out(mut hand: Hand, mut deck: Deck) -> Result<(Hand, Deck), DeckError> {
    while hand.score() < DEALER_STAND {
        let (card, remaining) = deck.take()?;
        hand.push(card);
        deck = remaining;
    }

    Ok((hand, deck))
}
