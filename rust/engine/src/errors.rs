use thiserror::Error;

use crate::cards::Card;
use crate::game::PhaseKind;
use crate::player::SeatId;
use crate::rules::BetAction;

/// Why a betting action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalReason {
    /// `check` while the seat still owes chips
    CheckFacingBet,
    /// `call` with nothing to call
    NothingToCall,
    /// `bet` after the round already has a bet
    BetAlreadyOpen,
    /// `raise` before anything was bet
    NothingToRaise,
    /// `bet`/`raise` once the round reached its raise cap
    CapReached,
}

/// Why a draw request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawViolation {
    NoDrawRemaining,
    TooManyDiscards { count: usize, max: usize },
    CardNotInHand(Card),
    DuplicateDiscard(Card),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Table {0} not found")]
    TableNotFound(String),
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("Wrong phase: expected {expected:?}, table is in {actual:?}")]
    WrongPhase {
        expected: PhaseKind,
        actual: PhaseKind,
    },
    #[error("Seat {0} is not at this table")]
    UnknownSeat(SeatId),
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    WrongTurn { expected: SeatId, actual: SeatId },
    #[error("Illegal action {action:?}: {reason:?}")]
    IllegalAction {
        action: BetAction,
        reason: IllegalReason,
    },
    #[error("Illegal draw by seat {seat}: {violation:?}")]
    IllegalDraw {
        seat: SeatId,
        violation: DrawViolation,
    },
    #[error("Seat {seat} cannot cover {needed} chips (stack {stack})")]
    InsufficientChips {
        seat: SeatId,
        needed: u32,
        stack: u32,
    },
    #[error("Insufficient state: {0}")]
    InsufficientState(&'static str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardParseError {
    #[error("card must be rank followed by suit, got {0:?}")]
    Length(String),
    #[error("invalid rank {0:?}")]
    InvalidRank(char),
    #[error("invalid suit {0:?}")]
    InvalidSuit(char),
}
