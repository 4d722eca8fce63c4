//! Read-only snapshots handed back to callers.

use serde::Serialize;

use crate::cards::Card;
use crate::game::PhaseKind;
use crate::hand::{LowballKey, HAND_SIZE};
use crate::logger::{ActionRecord, HandRecord, RevealedHand, Street};
use crate::player::SeatId;

/// What one seat is allowed to see. Other seats' cards stay hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub table_id: String,
    pub seat: SeatId,
    pub hand: Option<[Card; HAND_SIZE]>,
    pub pot: u32,
    pub to_call: u32,
    pub street: Street,
    pub phase: PhaseKind,
    pub on_turn: SeatId,
    pub button: SeatId,
    pub stacks: Vec<u32>,
    pub in_hand: Vec<bool>,
    pub history: Vec<ActionRecord>,
}

impl SeatView {
    pub fn is_my_turn(&self) -> bool {
        self.on_turn == self.seat && matches!(self.phase, PhaseKind::Bet | PhaseKind::Draw)
    }
}

/// Debugging/status view of the round in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundStatus {
    pub street: Street,
    pub phase: PhaseKind,
    pub pot: u32,
    pub current_bet: u32,
    pub raise_count: u32,
    pub cap: u32,
    pub bet_unit: u32,
    /// Per-seat commitments in the current betting round (zeros outside one)
    pub committed: Vec<u32>,
    pub on_turn: SeatId,
    pub first_to_act: Option<SeatId>,
    pub draw_started_by: Option<SeatId>,
    pub deck_remaining: usize,
    pub discard_count: usize,
}

/// Chips paid to one winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Payout {
    pub seat: SeatId,
    pub amount: u32,
}

/// Outcome of settling a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowdownResult {
    pub table_id: String,
    pub winners: Vec<SeatId>,
    pub pot: u32,
    pub payouts: Vec<Payout>,
    pub winning_hand: [Card; HAND_SIZE],
    pub winning_key: LowballKey,
    pub revealed: Vec<RevealedHand>,
    pub stacks: Vec<u32>,
    pub record: HandRecord,
}
