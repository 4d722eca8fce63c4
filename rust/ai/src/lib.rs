//! # lowball-ai: Autoplay for Triple Draw Tables
//!
//! Drives every non-human seat of a [`lowball_engine::engine::Table`]: a
//! deterministic betting and discard heuristic plus the bounded loop that
//! applies it until the human seat is on turn or betting is over.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for autoplay decisions
//! - [`baseline`] - Score-and-threshold heuristic used by default
//! - [`station`] - Passive opponent that never folds or raises
//! - [`autoplay`] - The [`autoplay::Autoplayer`] orchestrator
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use lowball_ai::autoplay::{auto_advance, Autoplayer};
//! use lowball_engine::store::TableStore;
//!
//! let mut store = TableStore::new();
//! let id = store.create_table(4, 1, 2, 4, 1, 2).unwrap();
//! store.deal(&id).unwrap();
//!
//! // seat 3 opens, then seat 0 (the human seat) is on turn
//! let view = auto_advance(&mut store, &id, &Autoplayer::default()).unwrap();
//! assert!(view.is_my_turn());
//! assert_eq!(view.on_turn, 0);
//! ```

use lowball_engine::cards::Card;
use lowball_engine::engine::Table;
use lowball_engine::hand::HAND_SIZE;
use lowball_engine::logger::Street;
use lowball_engine::player::SeatId;
use lowball_engine::rules::BetAction;

pub mod autoplay;
pub mod baseline;
pub mod station;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: [&str; 2] = ["baseline", "station"];

/// What a seat knows when it has to bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionContext {
    pub hand: [Card; HAND_SIZE],
    pub to_call: u32,
    /// Bet/raise size of the current street
    pub bet_unit: u32,
    pub street: Street,
    /// Bets plus raises already made this round
    pub raises_so_far: u32,
}

impl DecisionContext {
    /// Context for `seat` if it is in a betting round and holds cards.
    pub fn for_seat(table: &Table, seat: SeatId) -> Option<Self> {
        let round = table.phase().betting_round()?;
        let hand = *table.seat(seat)?.hand()?;
        Some(Self {
            hand,
            to_call: round.to_call(seat),
            bet_unit: table.bet_unit(),
            street: round.street,
            raises_so_far: round.raise_count,
        })
    }

    /// A call of at most one bet unit.
    pub fn is_cheap(&self) -> bool {
        self.to_call <= self.bet_unit
    }
}

/// Trait defining the interface for autoplay opponents.
///
/// Decisions are pure functions of what the seat can see; the orchestrator
/// checks them against the table's legal actions before applying them.
pub trait AIOpponent: Send + Sync {
    /// Preferred betting action. It may be illegal (e.g. raising into a
    /// capped round); the orchestrator then falls back to check, call or fold.
    fn decide_action(&self, ctx: &DecisionContext) -> BetAction;

    /// Up to three cards from `hand` to replace. Empty means stand pat.
    fn choose_discards(&self, hand: &[Card; HAND_SIZE]) -> Vec<Card>;

    fn name(&self) -> &str;
}

/// Factory function to create AI opponents by type string.
///
/// # Example
///
/// ```rust
/// use lowball_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "station" => Some(Box::new(station::CallingStation)),
        _ => None,
    }
}
