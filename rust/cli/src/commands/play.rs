//! `play`: interactive hands from seat 0 against autoplayed opponents.
//!
//! Betting prompts accept `fold`, `check`, `call`, `bet` or `raise` (or their
//! first letter, `x` for check). Draw prompts accept `pat`, or the cards to
//! throw, optionally prefixed with `draw` (e.g. `draw 9c Kd`). `q` or `quit`
//! ends the session; so does end of input.

use std::io::{BufRead, Write};

use lowball_ai::autoplay::{advance, Autoplayer, StopReason};
use lowball_ai::create_ai;
use lowball_engine::cards::{parse_cards, Card};
use lowball_engine::errors::GameError;
use lowball_engine::game::PhaseKind;
use lowball_engine::player::SeatId;
use lowball_engine::rules::BetAction;
use lowball_engine::store::TableStore;

use super::{resolve_config, Overrides};
use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;

const HUMAN_SEAT: SeatId = 0;

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    Bet(BetAction),
    Draw(Vec<Card>),
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "q" | "quit")
}

fn parse_bet_input(line: &str) -> Result<Input, String> {
    if is_quit(line) {
        return Ok(Input::Quit);
    }
    line.parse().map(Input::Bet)
}

fn parse_draw_input(line: &str) -> Result<Input, String> {
    if is_quit(line) {
        return Ok(Input::Quit);
    }
    let lower = line.to_ascii_lowercase();
    if lower == "pat" || lower == "draw" {
        return Ok(Input::Draw(Vec::new()));
    }
    let cards = lower.strip_prefix("draw").map_or(line, |_| &line[4..]);
    parse_cards(cards).map(Input::Draw).map_err(|e| e.to_string())
}

pub fn handle_play_command(
    hands: u32,
    overrides: Overrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".into()));
    }
    let cfg = resolve_config(overrides)?;
    let ai = create_ai(&cfg.ai)
        .ok_or_else(|| CliError::Config(format!("unknown ai '{}'", cfg.ai)))?;
    let autoplayer = Autoplayer::new(ai);

    let mut store = TableStore::new();
    let id = store.create_table_with(cfg.table_config(Some(HUMAN_SEAT)))?;
    writeln!(
        out,
        "Table {} | {} seats | seed {} | opponents: {}",
        id,
        cfg.seats,
        store.table(&id)?.seed(),
        autoplayer.ai_name()
    )?;

    let mut played = 0;
    'session: for n in 1..=hands {
        match store.deal(&id) {
            Ok(_) => {}
            Err(GameError::InsufficientChips { .. }) => {
                ui::display_warning(err, "fewer than two seats can cover the big blind")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        writeln!(out, "\nHand {}", n)?;
        if !store.table(&id)?.seat(HUMAN_SEAT).is_some_and(|s| s.in_hand()) {
            writeln!(out, "You sit this hand out: your stack cannot cover the big blind")?;
        }
        let mut shown = 0;

        loop {
            let (view, report) = advance(&mut store, &id, &autoplayer)?;
            ui::render_history(out, &view.history, shown)?;
            shown = view.history.len();

            match report.stop {
                StopReason::HumanTurn(_) => {}
                StopReason::Showdown | StopReason::Idle => break,
                StopReason::Rejected(e) => return Err(e.into()),
                StopReason::StepLimit | StopReason::Stalled => {
                    ui::display_warning(err, "opponents stopped responding; settling now")?;
                    break;
                }
            }

            ui::render_view(out, &view)?;
            let drawing = view.phase == PhaseKind::Draw;
            if drawing {
                write!(out, "Discard (pat | draw <cards>): ")?;
            } else {
                let legal: Vec<&str> = store
                    .table(&id)?
                    .legal_actions(HUMAN_SEAT)
                    .into_iter()
                    .map(BetAction::as_str)
                    .collect();
                write!(out, "Action ({}): ", legal.join("/"))?;
            }
            out.flush()?;

            let Some(line) = read_stdin_line(stdin) else {
                writeln!(out)?;
                break 'session;
            };
            let parsed = if drawing {
                parse_draw_input(&line)
            } else {
                parse_bet_input(&line)
            };
            let applied = match parsed {
                Ok(Input::Quit) => break 'session,
                Ok(Input::Bet(action)) => store.act(&id, HUMAN_SEAT, action).map(|_| ()),
                Ok(Input::Draw(cards)) => store.draw(&id, HUMAN_SEAT, &cards).map(|_| ()),
                Err(msg) => {
                    ui::write_error(err, &msg)?;
                    continue;
                }
            };
            if let Err(e) = applied {
                ui::write_error(err, &e.to_string())?;
            }
        }

        let result = store.showdown(&id)?;
        ui::render_showdown(out, &result)?;
        played += 1;
    }

    let stacks: Vec<String> = store
        .table(&id)?
        .seats()
        .iter()
        .map(|s| format!("{}:{}", s.id(), s.stack()))
        .collect();
    writeln!(out, "\nSession complete: {} hand(s) played", played)?;
    writeln!(out, "Final stacks: {}", stacks.join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Cursor;

    #[test]
    fn draw_input_forms() {
        assert_eq!(parse_draw_input("pat"), Ok(Input::Draw(Vec::new())));
        assert_eq!(parse_draw_input("Q"), Ok(Input::Quit));
        let expected = parse_cards("9c Kd").unwrap();
        assert_eq!(parse_draw_input("draw 9c Kd"), Ok(Input::Draw(expected.clone())));
        assert_eq!(parse_draw_input("9c Kd"), Ok(Input::Draw(expected)));
        assert!(parse_draw_input("draw 1x").is_err());
    }

    #[test]
    fn bet_input_forms() {
        assert_eq!(parse_bet_input("x"), Ok(Input::Bet(BetAction::Check)));
        assert_eq!(parse_bet_input("RAISE"), Ok(Input::Bet(BetAction::Raise)));
        assert_eq!(parse_bet_input("quit"), Ok(Input::Quit));
        assert!(parse_bet_input("shove").is_err());
    }

    #[test]
    #[serial]
    fn zero_hands_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("");
        let res = handle_play_command(0, Overrides::default(), &mut out, &mut err, &mut stdin);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }

    #[test]
    #[serial]
    fn quitting_ends_the_session_cleanly() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("q\n");
        let overrides = Overrides {
            seed: Some(5),
            seats: Some(3),
            ai: Some("station".into()),
        };
        handle_play_command(2, overrides, &mut out, &mut err, &mut stdin).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Hand 1"));
        assert!(text.contains("Session complete: 0 hand(s) played"));
    }

    #[test]
    #[serial]
    fn scripted_session_plays_every_hand() {
        // every prompt eventually accepts one of these
        let script = "call\ncheck\npat\n".repeat(300);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(script);
        let overrides = Overrides {
            seed: Some(5),
            seats: Some(3),
            ai: Some("station".into()),
        };
        handle_play_command(2, overrides, &mut out, &mut err, &mut stdin).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Hand 2"));
        assert!(text.contains("Winning hand:"));
        assert!(text.contains("Session complete: 2 hand(s) played"));
    }
}
