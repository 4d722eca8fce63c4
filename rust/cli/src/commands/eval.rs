//! `eval`: ranks two five-card hands against each other.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::io::Write;

use lowball_engine::cards::{format_cards, parse_cards, Card};
use lowball_engine::hand::{compare_lowball, evaluate_lowball, HAND_SIZE};

use crate::error::CliError;

fn parse_hand(label: &str, input: &str) -> Result<[Card; HAND_SIZE], CliError> {
    let cards = parse_cards(input)
        .map_err(|e| CliError::InvalidInput(format!("hand {}: {}", label, e)))?;
    let count = cards.len();
    let hand: [Card; HAND_SIZE] = cards.try_into().map_err(|_| {
        CliError::InvalidInput(format!(
            "hand {} needs {} cards, got {}",
            label, HAND_SIZE, count
        ))
    })?;
    Ok(hand)
}

pub fn handle_eval_command(
    hand_a: &str,
    hand_b: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let a = parse_hand("A", hand_a)?;
    let b = parse_hand("B", hand_b)?;
    let mut seen = HashSet::new();
    if let Some(dup) = a.iter().chain(b.iter()).find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!(
            "card {} appears more than once",
            dup
        )));
    }

    let key_a = evaluate_lowball(&a);
    let key_b = evaluate_lowball(&b);
    writeln!(out, "A: {}  {}", format_cards(&a), key_a)?;
    writeln!(out, "B: {}  {}", format_cards(&b), key_b)?;
    let verdict = match compare_lowball(&a, &b) {
        Ordering::Less => "A wins",
        Ordering::Greater => "B wins",
        Ordering::Equal => "tie",
    };
    writeln!(out, "{}", verdict)?;
    Ok(())
}
