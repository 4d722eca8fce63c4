use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::HAND_SIZE;

/// Seats are identified by their ordinal position at the table.
pub type SeatId = usize;

/// Default starting stack size for each seat in chips
pub const STARTING_STACK: u32 = 100;

/// One seat at a triple draw table: chip stack, five-card hand and per-hand flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    id: SeatId,
    stack: u32,
    /// Five cards while dealt in; kept after folding so showdown can reveal it
    hand: Option<[Card; HAND_SIZE]>,
    in_hand: bool,
    /// 1 while the seat still owes its draw in the current draw phase
    draws_remaining: u8,
}

impl Seat {
    pub fn new(id: SeatId, stack: u32) -> Self {
        Self {
            id,
            stack,
            hand: None,
            in_hand: false,
            draws_remaining: 0,
        }
    }

    pub fn id(&self) -> SeatId {
        self.id
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hand(&self) -> Option<&[Card; HAND_SIZE]> {
        self.hand.as_ref()
    }
    pub fn in_hand(&self) -> bool {
        self.in_hand
    }
    pub fn draws_remaining(&self) -> u8 {
        self.draws_remaining
    }

    pub(crate) fn deal_in(&mut self, cards: [Card; HAND_SIZE]) {
        self.hand = Some(cards);
        self.in_hand = true;
        self.draws_remaining = 0;
    }

    /// Leaves the seat out of the coming hand with no cards.
    pub(crate) fn sit_out(&mut self) {
        self.hand = None;
        self.in_hand = false;
        self.draws_remaining = 0;
    }

    pub(crate) fn fold(&mut self) {
        self.in_hand = false;
        self.draws_remaining = 0;
    }

    pub(crate) fn grant_draw(&mut self) {
        if self.in_hand {
            self.draws_remaining = 1;
        }
    }

    pub(crate) fn clear_draw(&mut self) {
        self.draws_remaining = 0;
    }

    /// Swaps each discarded card for the replacement at the same index,
    /// keeping the positions of the cards that stay.
    pub(crate) fn replace_cards(&mut self, discards: &[Card], replacements: &[Card]) {
        if let Some(hand) = &mut self.hand {
            for (gone, &new) in discards.iter().zip(replacements) {
                if let Some(slot) = hand.iter_mut().find(|c| *c == gone) {
                    *slot = new;
                }
            }
        }
        self.draws_remaining = 0;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Moves `amount` chips from the stack toward the pot.
    pub(crate) fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                seat: self.id,
                needed: amount,
                stack: self.stack,
            });
        }
        self.stack -= amount;
        Ok(())
    }
}
