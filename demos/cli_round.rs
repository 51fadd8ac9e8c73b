//! CLI round example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, GameState, Hand, Outcome, Rank, Suit, Turn};

fn main() {
    println!("Blackjack round example (type 'q' to quit)");

    let mut state = GameState::new(seed());

    loop {
        print_table(&state);

        let busted = state.player_hand.is_bust();
        if state.turn == Turn::Dealer || busted {
            print_outcome(&state);
            match prompt_line("[r]eset [q]uit: ").as_str() {
                "r" | "reset" => {
                    state = GameState::new(seed());
                    continue;
                }
                _ => return,
            }
        }

        let action = prompt_line("[h]it [s]tand [r]eset [q]uit: ");
        let result = match action.as_str() {
            "h" | "hit" => state.hit(),
            "s" | "stand" => state.stand(),
            "r" | "reset" => Ok(GameState::new(seed())),
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(next) => state = next,
            Err(err) => println!("Action error: {err}"),
        }
    }
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!("\nDeck: {} cards remaining", state.cards_remaining());

    println!(
        "Player: {} (score {})",
        format_hand(&state.player_hand),
        state.player_hand.score()
    );

    // The dealer's first card stays face down until the player finishes.
    if state.turn == Turn::Player && !state.player_hand.is_bust() {
        let up_cards = &state.dealer_hand.cards()[1..];
        let shown: Vec<String> = up_cards.iter().map(format_card).collect();
        println!("Dealer: ?? {}", shown.join(" "));
    } else {
        println!(
            "Dealer: {} (score {})",
            format_hand(&state.dealer_hand),
            state.dealer_hand.score()
        );
    }
}

fn print_outcome(state: &GameState) {
    let message = match state.outcome() {
        Outcome::PlayerWin => "Player wins.",
        Outcome::DealerWin => "Dealer wins.",
        Outcome::Draw => "Draw.",
        Outcome::NoResult => "No result (bust).",
    };
    println!("{message}");
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        numeric => numeric.value().to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
