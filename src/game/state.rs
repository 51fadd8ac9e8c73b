//! Turn state types.

/// Whose action is currently permitted.
///
/// A round starts on the player's turn and moves to the dealer's turn
/// exactly once, when the player stands. There is no transition out of
/// [`Turn::Dealer`]; a fresh deal is the only way to start a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Waiting for the player to hit or stand.
    Player,
    /// The dealer has played out; the round is over.
    Dealer,
}
