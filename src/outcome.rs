//! Round outcome evaluation.

use crate::game::GameState;

/// The result of a round, as a pure function of the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player wins.
    PlayerWin,
    /// The dealer wins.
    DealerWin,
    /// The round is a draw.
    Draw,
    /// No result: at least one hand is bust.
    NoResult,
}

impl GameState {
    /// Evaluates the outcome of the round.
    ///
    /// This is pure and idempotent, and may be queried at any point, not
    /// only after the dealer has played. A bust on either side yields
    /// [`Outcome::NoResult`]; the presentation layer decides how to show a
    /// busted round. On equal scores of 21, a natural blackjack (two
    /// cards) beats a drawn 21; otherwise equal scores are a draw.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        let dealer_score = self.dealer_hand.score();
        let player_score = self.player_hand.score();

        if dealer_score > 21 || player_score > 21 {
            return Outcome::NoResult;
        }

        if dealer_score == player_score {
            if dealer_score == 21 {
                if self.player_hand.is_blackjack() && !self.dealer_hand.is_blackjack() {
                    return Outcome::PlayerWin;
                }
                if self.dealer_hand.is_blackjack() && !self.player_hand.is_blackjack() {
                    return Outcome::DealerWin;
                }
            }
            return Outcome::Draw;
        }

        if dealer_score < player_score {
            Outcome::PlayerWin
        } else {
            Outcome::DealerWin
        }
    }
}
