use crate::engine::Table;
use crate::errors::GameError;
use crate::game::{Phase, PhaseKind};
use crate::hand::{evaluate_lowball, LowballKey};
use crate::logger::{format_hand_id, today_yyyymmdd, HandRecord, RevealedHand, ShowdownInfo};
use crate::player::SeatId;
use crate::view::{Payout, ShowdownResult};

/// Splits `pot` between `winners`: an equal floor share each, then one extra
/// chip per winner in the order given until the remainder is gone.
pub fn split_pot(pot: u32, winners: &[SeatId]) -> Vec<Payout> {
    if winners.is_empty() {
        return Vec::new();
    }
    let count = winners.len() as u32;
    let share = pot / count;
    let remainder = pot % count;
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| Payout {
            seat,
            amount: share + u32::from((i as u32) < remainder),
        })
        .collect()
}

impl Table {
    /// Settles the hand: ranks every seat still in, pays the pot and moves
    /// the button.
    ///
    /// Callable once betting is over or earlier to force settlement on the
    /// current hands. Afterwards the table is idle until the next deal; the
    /// hand history stays readable until then.
    pub fn showdown(&mut self) -> Result<ShowdownResult, GameError> {
        if !self.phase.hand_in_progress() {
            return Err(GameError::WrongPhase {
                expected: PhaseKind::Showdown,
                actual: self.phase.kind(),
            });
        }

        let mut ranked: Vec<(SeatId, LowballKey)> = Vec::new();
        for seat in self.seats.iter().filter(|s| s.in_hand()) {
            let hand = seat
                .hand()
                .ok_or(GameError::InsufficientState("seat in hand without cards"))?;
            ranked.push((seat.id(), evaluate_lowball(hand)));
        }
        let Some(best) = ranked.iter().map(|(_, key)| *key).min() else {
            return Err(GameError::InsufficientState(
                "showdown with no seats in hand",
            ));
        };
        let winners: Vec<SeatId> = ranked
            .iter()
            .filter(|(_, key)| *key == best)
            .map(|(seat, _)| *seat)
            .collect();
        let winning_hand = *self.seats[winners[0]]
            .hand()
            .ok_or(GameError::InsufficientState("winner without cards"))?;

        let pot = self.pot;
        let payouts = split_pot(pot, &winners);
        for payout in &payouts {
            self.seats[payout.seat].add_chips(payout.amount);
        }
        self.pot = 0;

        let revealed: Vec<RevealedHand> = self
            .seats
            .iter()
            .map(|s| RevealedHand {
                seat: s.id(),
                hand: s.hand().copied(),
                in_hand: s.in_hand(),
            })
            .collect();
        let stacks: Vec<u32> = self.seats.iter().map(|s| s.stack()).collect();
        let notes = if ranked.len() == 1 {
            Some("uncontested".to_string())
        } else if winners.len() > 1 {
            Some("split pot".to_string())
        } else {
            None
        };
        let record = HandRecord {
            hand_id: format_hand_id(&today_yyyymmdd(), self.hand_number),
            table_id: self.id.clone(),
            seed: Some(self.seed),
            button: self.button,
            actions: self.history.clone(),
            hands: revealed.clone(),
            stacks: stacks.clone(),
            ts: None,
            showdown: Some(ShowdownInfo {
                winners: winners.clone(),
                pot,
                notes,
            }),
        };

        for seat in self.seats.iter_mut() {
            seat.clear_draw();
        }
        self.phase = Phase::Idle;
        self.button = (self.button + 1) % self.seats.len();

        tracing::info!(
            table_id = %self.id,
            hand = self.hand_number,
            pot,
            ?winners,
            winning_key = %best,
            "hand settled"
        );

        Ok(ShowdownResult {
            table_id: self.id.clone(),
            winners,
            pot,
            payouts,
            winning_hand,
            winning_key: best,
            revealed,
            stacks,
            record,
        })
    }
}
