//! A pure-value blackjack round engine with optional `no_std` support.
//!
//! The crate models a single player-versus-dealer round as a plain
//! [`GameState`] value with pure transitions: dealing, hitting, standing,
//! and outcome evaluation. A presentation layer holds the current state,
//! replaces it wholesale on each user action, and renders whatever it gets
//! back; all rules live here.
//!
//! # Example
//!
//! ```
//! use twentyone::{GameState, Turn};
//!
//! let state = GameState::new(42);
//! assert_eq!(state.turn, Turn::Player);
//!
//! let state = state.hit().unwrap();
//! let state = state.stand().unwrap();
//! assert_eq!(state.turn, Turn::Dealer);
//!
//! let _ = state.outcome();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod outcome;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError};
pub use game::{GameState, Turn};
pub use hand::Hand;
pub use outcome::Outcome;
