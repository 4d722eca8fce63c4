use lowball_ai::autoplay::{advance, auto_advance, Autoplayer, StopReason};
use lowball_ai::create_ai;
use lowball_engine::config::TableConfig;
use lowball_engine::engine::Table;
use lowball_engine::game::PhaseKind;
use lowball_engine::rules::BetAction;
use lowball_engine::store::TableStore;

fn table(seed: u64, human_seat: Option<usize>) -> Table {
    let config = TableConfig {
        seed: Some(seed),
        human_seat,
        ..TableConfig::default()
    };
    Table::new(format!("auto-{}", seed), config).unwrap()
}

#[test]
fn stops_when_the_human_seat_is_on_turn() {
    let mut table = table(1, Some(0));
    table.deal().unwrap();
    let report = Autoplayer::default().run(&mut table);
    // seat 3 acts first pre-draw, seat 0 right after
    assert_eq!(report.stop, StopReason::HumanTurn(0));
    assert_eq!(report.steps, 1);
    assert_eq!(table.on_turn(), 0);
}

#[test]
fn without_a_human_every_hand_reaches_showdown() {
    for seed in 0..25 {
        let mut table = table(seed, None);
        table.deal().unwrap();
        let report = Autoplayer::default().run(&mut table);
        assert_eq!(report.stop, StopReason::Showdown, "seed {seed}");
        assert_eq!(table.phase().kind(), PhaseKind::Showdown);
        let result = table.showdown().unwrap();
        assert!(!result.winners.is_empty());
    }
}

#[test]
fn calling_stations_see_every_street() {
    let station = Autoplayer::new(create_ai("station").unwrap());
    let mut table = table(7, None);
    table.deal().unwrap();
    assert_eq!(station.run(&mut table).stop, StopReason::Showdown);
    assert_eq!(table.pot(), 8);
    let draws = table
        .history()
        .iter()
        .filter(|r| matches!(r.action, lowball_engine::logger::HandAction::Draw(0)))
        .count();
    assert_eq!(draws, 12);
}

#[test]
fn human_can_play_through_autoplayed_hand() {
    let mut store = TableStore::new();
    let id = store.create_table(4, 1, 2, 4, 1, 2).unwrap();
    store.deal(&id).unwrap();
    let autoplayer = Autoplayer::default();
    for _ in 0..100 {
        let view = auto_advance(&mut store, &id, &autoplayer).unwrap();
        if !view.is_my_turn() {
            break;
        }
        match view.phase {
            PhaseKind::Bet => {
                let action = if view.to_call > 0 {
                    BetAction::Call
                } else {
                    BetAction::Check
                };
                store.act(&id, 0, action).unwrap();
            }
            PhaseKind::Draw => {
                store.draw(&id, 0, &[]).unwrap();
            }
            _ => unreachable!(),
        }
    }
    let status = store.inspect_round(&id).unwrap();
    assert_eq!(status.phase, PhaseKind::Showdown);
    let chips: u32 = store.showdown(&id).unwrap().stacks.iter().sum();
    assert_eq!(chips, 400);
}

#[test]
fn step_limit_is_reported() {
    let mut table = table(3, None);
    table.deal().unwrap();
    let report = Autoplayer::default().with_max_steps(2).run(&mut table);
    assert_eq!(report.stop, StopReason::StepLimit);
    assert_eq!(report.steps, 2);
}

#[test]
fn idle_table_is_left_alone() {
    let mut store = TableStore::new();
    let id = store.create_table(3, 1, 2, 4, 1, 2).unwrap();
    let (view, report) = advance(&mut store, &id, &Autoplayer::default()).unwrap();
    assert_eq!(report.stop, StopReason::Idle);
    assert_eq!(report.steps, 0);
    assert_eq!(view.phase, PhaseKind::Idle);
    assert!(auto_advance(&mut store, "missing", &Autoplayer::default()).is_err());
}

#[test]
fn long_session_deals_around_busted_seats() {
    let config = TableConfig {
        seed: Some(1),
        human_seat: None,
        starting_stack: 20,
        ..TableConfig::default()
    };
    let mut table = Table::new("long".to_string(), config).unwrap();
    let big = table.config().blinds.big;
    let chips = table.chips_in_play();
    let autoplayer = Autoplayer::default();
    let mut played = 0;

    for _ in 0..500 {
        let covering: Vec<bool> = table.seats().iter().map(|s| s.stack() >= big).collect();
        match table.deal() {
            Ok(()) => {}
            Err(lowball_engine::errors::GameError::InsufficientChips { seat, .. }) => {
                assert!(covering.iter().filter(|&&c| c).count() < 2);
                assert!(!covering[seat]);
                break;
            }
            Err(e) => panic!("unexpected deal error: {e}"),
        }
        for (seat, &can_post) in table.seats().iter().zip(&covering) {
            assert_eq!(seat.in_hand(), can_post);
        }
        assert_eq!(autoplayer.run(&mut table).stop, StopReason::Showdown);
        table.showdown().unwrap();
        assert_eq!(table.chips_in_play(), chips);
        played += 1;
    }
    assert!(played > 0);
}
