//! Bounded loop that plays every non-human seat.
//!
//! Each step asks the opponent for a decision, restricts it to what the
//! table allows and applies it. The loop stops at the human seat's turn, at
//! showdown, after `max_steps` steps, or as soon as a step leaves the table
//! unchanged.

use std::collections::HashSet;

use crate::baseline::BaselineAI;
use crate::{AIOpponent, DecisionContext};
use lowball_engine::cards::Card;
use lowball_engine::draw::MAX_DISCARDS;
use lowball_engine::engine::Table;
use lowball_engine::errors::GameError;
use lowball_engine::game::PhaseKind;
use lowball_engine::hand::HAND_SIZE;
use lowball_engine::logger::Street;
use lowball_engine::player::SeatId;
use lowball_engine::rules::BetAction;
use lowball_engine::store::TableStore;
use lowball_engine::view::SeatView;

/// Step budget for one autoplay run.
pub const DEFAULT_MAX_STEPS: usize = 300;

/// Why an autoplay run returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The human seat is on turn
    HumanTurn(SeatId),
    /// Betting is over; the hand waits for settlement
    Showdown,
    /// No hand in progress
    Idle,
    StepLimit,
    /// A step was applied but nothing about the table changed
    Stalled,
    /// The table refused even the fallback decision
    Rejected(GameError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayReport {
    pub steps: usize,
    pub stop: StopReason,
}

/// Everything that must change when a step makes progress.
#[derive(Debug, PartialEq, Eq)]
struct Progress {
    phase: PhaseKind,
    street: Street,
    on_turn: SeatId,
    raise_count: u32,
    current_bet: u32,
    pot: u32,
    actions: usize,
}

impl Progress {
    fn of(table: &Table) -> Self {
        let status = table.inspect_round();
        Self {
            phase: status.phase,
            street: status.street,
            on_turn: status.on_turn,
            raise_count: status.raise_count,
            current_bet: status.current_bet,
            pot: status.pot,
            actions: table.history().len(),
        }
    }
}

/// First action of `[preferred, check, call, fold]` that the table allows.
pub fn choose_legal(preferred: BetAction, legal: &[BetAction]) -> Option<BetAction> {
    [preferred, BetAction::Check, BetAction::Call, BetAction::Fold]
        .into_iter()
        .find(|a| legal.contains(a))
}

/// Keeps only distinct cards that are in `hand`, at most three of them.
pub fn sanitize_discards(hand: &[Card; HAND_SIZE], wanted: &[Card]) -> Vec<Card> {
    let mut seen = HashSet::new();
    wanted
        .iter()
        .copied()
        .filter(|c| hand.contains(c) && seen.insert(*c))
        .take(MAX_DISCARDS)
        .collect()
}

pub struct Autoplayer {
    ai: Box<dyn AIOpponent>,
    max_steps: usize,
}

impl Default for Autoplayer {
    fn default() -> Self {
        Self::new(Box::new(BaselineAI::new()))
    }
}

impl Autoplayer {
    pub fn new(ai: Box<dyn AIOpponent>) -> Self {
        Self {
            ai,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn ai_name(&self) -> &str {
        self.ai.name()
    }

    /// Plays non-human seats until one of the [`StopReason`]s applies.
    pub fn run(&self, table: &mut Table) -> AutoplayReport {
        let human = table.config().human_seat;
        let report = |steps, stop| AutoplayReport { steps, stop };
        for steps in 0..self.max_steps {
            let seat = table.on_turn();
            match table.phase().kind() {
                PhaseKind::Idle => return report(steps, StopReason::Idle),
                PhaseKind::Showdown => return report(steps, StopReason::Showdown),
                PhaseKind::Bet | PhaseKind::Draw if human == Some(seat) => {
                    return report(steps, StopReason::HumanTurn(seat));
                }
                _ => {}
            }

            let before = Progress::of(table);
            let applied = match table.phase().kind() {
                PhaseKind::Draw => self.draw_step(table, seat),
                _ => self.bet_step(table, seat),
            };
            if let Err(err) = applied {
                tracing::warn!(table_id = %table.id(), seat, error = %err, "autoplay step rejected");
                return report(steps, StopReason::Rejected(err));
            }
            if Progress::of(table) == before {
                tracing::warn!(table_id = %table.id(), seat, "autoplay made no progress");
                return report(steps + 1, StopReason::Stalled);
            }
        }
        tracing::warn!(table_id = %table.id(), max_steps = self.max_steps, "autoplay step limit reached");
        report(self.max_steps, StopReason::StepLimit)
    }

    fn bet_step(&self, table: &mut Table, seat: SeatId) -> Result<(), GameError> {
        let ctx = DecisionContext::for_seat(table, seat)
            .ok_or(GameError::InsufficientState("autoplay seat has no betting context"))?;
        let preferred = self.ai.decide_action(&ctx);
        let legal = table.legal_actions(seat);
        let action = choose_legal(preferred, &legal)
            .ok_or(GameError::InsufficientState("no legal action for autoplay seat"))?;
        if action != preferred {
            tracing::debug!(seat, %preferred, %action, "autoplay fell back to a legal action");
        }
        table.act(seat, action)?;
        Ok(())
    }

    fn draw_step(&self, table: &mut Table, seat: SeatId) -> Result<(), GameError> {
        let hand = table
            .seat(seat)
            .and_then(|s| s.hand())
            .copied()
            .ok_or(GameError::InsufficientState("autoplay seat has no cards"))?;
        let discards = sanitize_discards(&hand, &self.ai.choose_discards(&hand));
        table.draw(seat, &discards)?;
        Ok(())
    }
}

/// Runs autoplay on a stored table and returns the human seat's view with the report.
pub fn advance(
    store: &mut TableStore,
    id: &str,
    autoplayer: &Autoplayer,
) -> Result<(SeatView, AutoplayReport), GameError> {
    let table = store.table_mut(id)?;
    let report = autoplayer.run(table);
    let view = table.view(table.config().human_seat.unwrap_or(0))?;
    Ok((view, report))
}

/// Plays every non-human seat until the human is on turn or betting is over.
pub fn auto_advance(
    store: &mut TableStore,
    id: &str,
    autoplayer: &Autoplayer,
) -> Result<SeatView, GameError> {
    advance(store, id, autoplayer).map(|(view, _)| view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lowball_engine::cards::parse_cards;
    use lowball_engine::config::TableConfig;

    #[test]
    fn fallback_prefers_check_then_call() {
        let capped = [BetAction::Fold, BetAction::Call];
        assert_eq!(choose_legal(BetAction::Raise, &capped), Some(BetAction::Call));
        let open = [BetAction::Fold, BetAction::Check, BetAction::Bet];
        assert_eq!(choose_legal(BetAction::Call, &open), Some(BetAction::Check));
        assert_eq!(choose_legal(BetAction::Bet, &open), Some(BetAction::Bet));
        assert_eq!(choose_legal(BetAction::Raise, &[]), None);
    }

    #[test]
    fn sanitize_drops_foreign_and_repeated_cards() {
        let hand: [Card; HAND_SIZE] = parse_cards("Kc Qd 7h 4s 2c").unwrap().try_into().unwrap();
        let wanted = parse_cards("Kc Kc As Qd 7h 4s").unwrap();
        assert_eq!(sanitize_discards(&hand, &wanted), parse_cards("Kc Qd 7h").unwrap());
    }

    #[test]
    fn progress_snapshot_changes_only_when_a_step_lands() {
        let config = TableConfig {
            seed: Some(3),
            human_seat: None,
            ..TableConfig::default()
        };
        let mut table = Table::new("progress".to_string(), config).unwrap();
        let idle = Progress::of(&table);
        assert_eq!(Progress::of(&table), idle);

        table.deal().unwrap();
        let dealt = Progress::of(&table);
        assert_ne!(dealt, idle);

        // seat 3 is on turn; a refused action leaves the snapshot as it was
        assert!(table.act(0, BetAction::Check).is_err());
        assert_eq!(Progress::of(&table), dealt);

        table.act(3, BetAction::Call).unwrap();
        assert_ne!(Progress::of(&table), dealt);
    }
}
