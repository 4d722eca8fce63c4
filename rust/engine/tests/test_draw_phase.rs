mod common;

use common::four_seat_table;
use lowball_engine::engine::Table;
use lowball_engine::errors::{DrawViolation, GameError};
use lowball_engine::game::PhaseKind;
use lowball_engine::rules::BetAction;

fn into_first_draw(seed: u64) -> Table {
    let mut table = four_seat_table(seed);
    table.deal().unwrap();
    for (seat, action) in [
        (3, BetAction::Call),
        (0, BetAction::Call),
        (1, BetAction::Call),
        (2, BetAction::Check),
    ] {
        table.act(seat, action).unwrap();
    }
    table
}

#[test]
fn every_live_seat_gets_exactly_one_draw() {
    let table = into_first_draw(20);
    assert_eq!(table.phase().kind(), PhaseKind::Draw);
    assert!(table.seats().iter().all(|s| s.draws_remaining() == 1));
    assert_eq!(table.inspect_round().draw_started_by, Some(1));
}

#[test]
fn second_draw_in_same_phase_is_illegal() {
    let mut table = into_first_draw(21);
    let hand = *table.seat(1).unwrap().hand().unwrap();
    table.draw(1, &hand[..1]).unwrap();
    let replaced = *table.seat(1).unwrap().hand().unwrap();
    assert_eq!(
        table.draw(1, &replaced[..1]).unwrap_err(),
        GameError::IllegalDraw {
            seat: 1,
            violation: DrawViolation::NoDrawRemaining
        }
    );
    assert_eq!(table.seat(1).unwrap().hand().unwrap(), &replaced);
}

#[test]
fn drawing_out_of_turn_is_wrong_turn() {
    let mut table = into_first_draw(22);
    assert_eq!(
        table.draw(3, &[]).unwrap_err(),
        GameError::WrongTurn {
            expected: 1,
            actual: 3
        }
    );
}

#[test]
fn acting_during_draw_is_wrong_phase() {
    let mut table = into_first_draw(23);
    assert_eq!(
        table.act(1, BetAction::Check).unwrap_err(),
        GameError::WrongPhase {
            expected: PhaseKind::Bet,
            actual: PhaseKind::Draw
        }
    );
}

#[test]
fn replacements_never_return_own_discards() {
    let mut table = into_first_draw(24);
    let hand = *table.seat(1).unwrap().hand().unwrap();
    table.draw(1, &hand[..3]).unwrap();
    let after = table.seat(1).unwrap().hand().unwrap();
    for gone in &hand[..3] {
        assert!(!after.contains(gone));
    }
    assert_eq!(&after[3..], &hand[3..]);
    assert_eq!(table.deck().discard_count(), 3);
    assert_eq!(table.deck().remaining(), 52 - 20 - 3);
}

#[test]
fn draws_are_recorded_without_cards() {
    let mut table = into_first_draw(25);
    let hand = *table.seat(1).unwrap().hand().unwrap();
    table.draw(1, &hand[..2]).unwrap();
    let last = table.history().last().unwrap();
    let json = serde_json::to_string(last).unwrap();
    assert!(json.contains("\"draw\""));
    for card in &hand[..2] {
        assert!(!json.contains(&card.to_string()));
    }
}

#[test]
fn discard_pile_is_recycled_when_the_deck_runs_dry() {
    // 8 seats leave 12 cards; three full draws need up to 72
    let mut table = common::table_with_seats(8, 26);
    table.deal().unwrap();
    for _ in 0..300 {
        match table.phase().kind() {
            PhaseKind::Bet => {
                let seat = table.on_turn();
                let action = if table.to_call(seat) > 0 {
                    BetAction::Call
                } else {
                    BetAction::Check
                };
                table.act(seat, action).unwrap();
            }
            PhaseKind::Draw => {
                let seat = table.on_turn();
                let hand = *table.seat(seat).unwrap().hand().unwrap();
                table.draw(seat, &hand[..3]).unwrap();
                let mut all = table.all_cards();
                assert_eq!(all.len(), 52);
                all.sort();
                all.dedup();
                assert_eq!(all.len(), 52);
            }
            _ => break,
        }
    }
    assert_eq!(table.phase().kind(), PhaseKind::Showdown);
}
