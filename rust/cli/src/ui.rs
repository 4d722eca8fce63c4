//! Terminal rendering for table views and settlements.
//!
//! Every helper writes to the stream it is given so commands stay testable
//! against in-memory buffers.

use std::io::Write;

use lowball_engine::cards::format_cards;
use lowball_engine::game::PhaseKind;
use lowball_engine::logger::{ActionRecord, HandAction, Street};
use lowball_engine::view::{SeatView, ShowdownResult};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

pub fn street_label(street: Street) -> &'static str {
    match street {
        Street::Pre => "pre-draw",
        Street::Post1 => "after draw 1",
        Street::Post2 => "after draw 2",
        Street::Post3 => "after draw 3",
    }
}

/// One history entry as a short line, e.g. `seat 2 raises 4`.
pub fn render_action(record: &ActionRecord) -> String {
    let seat = record.seat;
    match record.action {
        HandAction::SmallBlind(n) => format!("seat {} posts small blind {}", seat, n),
        HandAction::BigBlind(n) => format!("seat {} posts big blind {}", seat, n),
        HandAction::Fold => format!("seat {} folds", seat),
        HandAction::Check => format!("seat {} checks", seat),
        HandAction::Call(n) => format!("seat {} calls {}", seat, n),
        HandAction::Bet(n) => format!("seat {} bets {}", seat, n),
        HandAction::Raise(n) => format!("seat {} raises {}", seat, n),
        HandAction::Draw(0) => format!("seat {} stands pat", seat),
        HandAction::Draw(n) => format!("seat {} draws {}", seat, n),
    }
}

pub fn render_view(out: &mut dyn Write, view: &SeatView) -> std::io::Result<()> {
    writeln!(
        out,
        "Street: {} | Pot: {} | Button: seat {}",
        street_label(view.street),
        view.pot,
        view.button
    )?;
    let stacks: Vec<String> = view
        .stacks
        .iter()
        .zip(&view.in_hand)
        .enumerate()
        .map(|(seat, (stack, live))| {
            if *live {
                format!("{}:{}", seat, stack)
            } else {
                format!("{}:{} (out)", seat, stack)
            }
        })
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(" "))?;
    if let Some(hand) = &view.hand {
        writeln!(out, "Your hand: {}", format_cards(hand))?;
    }
    if view.is_my_turn() {
        match view.phase {
            PhaseKind::Draw => writeln!(out, "Your draw")?,
            _ => writeln!(out, "To call: {}", view.to_call)?,
        }
    }
    Ok(())
}

/// Writes history entries from `from` onwards, one per line.
pub fn render_history(
    out: &mut dyn Write,
    history: &[ActionRecord],
    from: usize,
) -> std::io::Result<()> {
    for record in history.iter().skip(from) {
        writeln!(out, "  {}", render_action(record))?;
    }
    Ok(())
}

pub fn render_showdown(out: &mut dyn Write, result: &ShowdownResult) -> std::io::Result<()> {
    for revealed in result.revealed.iter().filter(|r| r.in_hand) {
        if let Some(hand) = &revealed.hand {
            writeln!(out, "Seat {} shows {}", revealed.seat, format_cards(hand))?;
        }
    }
    for payout in &result.payouts {
        writeln!(out, "Seat {} wins {}", payout.seat, payout.amount)?;
    }
    writeln!(
        out,
        "Winning hand: {} ({})",
        format_cards(&result.winning_hand),
        result.winning_key
    )?;
    if let Some(notes) = result.record.showdown.as_ref().and_then(|s| s.notes.as_ref()) {
        writeln!(out, "Note: {}", notes)?;
    }
    Ok(())
}
