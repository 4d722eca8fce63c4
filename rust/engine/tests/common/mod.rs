#![allow(dead_code)]

use lowball_engine::config::TableConfig;
use lowball_engine::engine::Table;
use lowball_engine::game::PhaseKind;
use lowball_engine::rules::BetAction;

/// 4 seats, blinds 1/2, bets 1/2, cap 4.
pub fn four_seat_table(seed: u64) -> Table {
    let config = TableConfig {
        seed: Some(seed),
        ..TableConfig::default()
    };
    Table::new(format!("test-{}", seed), config).expect("valid config")
}

pub fn table_with_seats(seats: usize, seed: u64) -> Table {
    let config = TableConfig {
        seats,
        seed: Some(seed),
        ..TableConfig::default()
    };
    Table::new(format!("test-{}-{}", seats, seed), config).expect("valid config")
}

/// Checks when possible, calls otherwise, stands pat in every draw,
/// until betting is over.
pub fn check_call_down(table: &mut Table) {
    for _ in 0..200 {
        match table.phase().kind() {
            PhaseKind::Bet => {
                let seat = table.on_turn();
                let action = if table.to_call(seat) > 0 {
                    BetAction::Call
                } else {
                    BetAction::Check
                };
                table.act(seat, action).expect("passive action is legal");
            }
            PhaseKind::Draw => {
                let seat = table.on_turn();
                table.draw(seat, &[]).expect("standing pat is legal");
            }
            PhaseKind::Showdown | PhaseKind::Idle => return,
        }
    }
    panic!("hand did not reach showdown");
}
