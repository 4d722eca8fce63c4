use serde::{Deserialize, Serialize};

use crate::logger::Street;
use crate::player::SeatId;
use crate::rules::ValidatedAction;

/// Phase discriminant, used in errors and status views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Idle,
    Bet,
    Draw,
    Showdown,
}

/// State of one fixed-limit betting round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingRound {
    pub street: Street,
    /// Total each seat must have committed this round
    pub current_bet: u32,
    /// Bets plus raises made this round (the opening bet counts)
    pub raise_count: u32,
    /// Chips each seat put in during this round only, indexed by seat
    pub committed: Vec<u32>,
    pub first_to_act: SeatId,
    pub any_acted: bool,
    /// Seats that acted since the last bet or raise
    acted: Vec<bool>,
}

impl BettingRound {
    pub fn new(street: Street, seat_count: usize, first_to_act: SeatId) -> Self {
        Self {
            street,
            current_bet: 0,
            raise_count: 0,
            committed: vec![0; seat_count],
            first_to_act,
            any_acted: false,
            acted: vec![false; seat_count],
        }
    }

    /// Adds a forced blind. Blinds do not count as acting and never as a raise.
    pub(crate) fn post_blind(&mut self, seat: SeatId, amount: u32) {
        self.committed[seat] += amount;
        self.current_bet = self.current_bet.max(self.committed[seat]);
    }

    pub(crate) fn record(&mut self, seat: SeatId, action: &ValidatedAction) {
        self.committed[seat] += action.amount();
        match *action {
            ValidatedAction::Bet(amount) => {
                self.current_bet = amount;
                self.reopen(seat);
            }
            ValidatedAction::Raise { new_bet, .. } => {
                self.current_bet = new_bet;
                self.reopen(seat);
            }
            _ => self.acted[seat] = true,
        }
        self.any_acted = true;
    }

    fn reopen(&mut self, aggressor: SeatId) {
        self.raise_count += 1;
        self.acted.fill(false);
        self.acted[aggressor] = true;
    }

    pub fn to_call(&self, seat: SeatId) -> u32 {
        self.current_bet
            .saturating_sub(self.committed.get(seat).copied().unwrap_or(0))
    }

    pub fn has_acted(&self, seat: SeatId) -> bool {
        self.acted.get(seat).copied().unwrap_or(false)
    }

    /// A round is closed once every live seat has matched the current bet and
    /// acted since the last bet or raise.
    pub fn is_closed<I: IntoIterator<Item = SeatId>>(&self, live_seats: I) -> bool {
        live_seats
            .into_iter()
            .all(|s| self.has_acted(s) && self.to_call(s) == 0)
    }
}

/// State of a draw phase between two betting rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRound {
    /// The betting street that just closed
    pub street: Street,
    /// The seat that opened this draw phase; the phase ends when the turn returns to it
    pub started_by: SeatId,
}

/// Where a hand currently stands. Each variant carries only the data that
/// is meaningful in that phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No hand in progress: fresh table or last hand settled
    Idle,
    Bet(BettingRound),
    Draw(DrawRound),
    /// Betting is over; waiting for settlement
    Showdown { street: Street },
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Bet(_) => PhaseKind::Bet,
            Phase::Draw(_) => PhaseKind::Draw,
            Phase::Showdown { .. } => PhaseKind::Showdown,
        }
    }

    pub fn street(&self) -> Street {
        match self {
            Phase::Idle => Street::Pre,
            Phase::Bet(round) => round.street,
            Phase::Draw(draw) => draw.street,
            Phase::Showdown { street } => *street,
        }
    }

    pub fn betting_round(&self) -> Option<&BettingRound> {
        match self {
            Phase::Bet(round) => Some(round),
            _ => None,
        }
    }

    pub fn hand_in_progress(&self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_reopens_action_for_everyone_else() {
        let mut round = BettingRound::new(Street::Post1, 3, 0);
        round.record(0, &ValidatedAction::Check);
        round.record(1, &ValidatedAction::Bet(1));
        assert_eq!(round.raise_count, 1);
        assert!(!round.has_acted(0));
        assert!(round.has_acted(1));
        round.record(2, &ValidatedAction::Call(1));
        assert!(!round.is_closed([0, 1, 2]));
        round.record(0, &ValidatedAction::Call(1));
        assert!(round.is_closed([0, 1, 2]));
    }

    #[test]
    fn blinds_set_the_bet_without_counting_as_action() {
        let mut round = BettingRound::new(Street::Pre, 4, 3);
        round.post_blind(1, 1);
        round.post_blind(2, 2);
        assert_eq!(round.current_bet, 2);
        assert_eq!(round.raise_count, 0);
        assert_eq!(round.to_call(1), 1);
        assert!(!round.has_acted(2));
        assert!(!round.any_acted);
    }
}
