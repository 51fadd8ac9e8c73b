//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur during a turn transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid on the current turn.
    #[error("action is not valid on the current turn")]
    OutOfTurn,
    /// The deck ran out of cards mid-transition.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::DeckExhausted,
        }
    }
}
