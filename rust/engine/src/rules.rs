use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{GameError, IllegalReason};
use crate::logger::Street;

/// A betting action in fixed-limit play. Sizes are implied by the street.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetAction {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl BetAction {
    pub const ALL: [BetAction; 5] = [
        BetAction::Fold,
        BetAction::Check,
        BetAction::Call,
        BetAction::Bet,
        BetAction::Raise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BetAction::Fold => "fold",
            BetAction::Check => "check",
            BetAction::Call => "call",
            BetAction::Bet => "bet",
            BetAction::Raise => "raise",
        }
    }
}

impl fmt::Display for BetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BetAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" | "f" => Ok(BetAction::Fold),
            "check" | "x" => Ok(BetAction::Check),
            "call" | "c" => Ok(BetAction::Call),
            "bet" | "b" => Ok(BetAction::Bet),
            "raise" | "r" => Ok(BetAction::Raise),
            other => Err(format!("unknown action '{}'", other)),
        }
    }
}

/// Fixed-limit sizing: small bet for Pre/Post1, big bet for Post2/Post3,
/// at most `cap` bets-or-raises per betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitConfig {
    pub small_bet: u32,
    pub big_bet: u32,
    pub cap: u32,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            small_bet: 1,
            big_bet: 2,
            cap: 4,
        }
    }
}

impl LimitConfig {
    pub fn bet_unit(&self, street: Street) -> u32 {
        if street.uses_big_bet() {
            self.big_bet
        } else {
            self.small_bet
        }
    }
}

/// Everything the legality check needs to know about the acting seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingContext {
    /// Total each seat must have committed this round
    pub current_bet: u32,
    /// What the acting seat already committed this round
    pub committed: u32,
    pub raise_count: u32,
    pub cap: u32,
    /// Bet/raise increment for the street
    pub unit: u32,
    /// Chips behind for the acting seat
    pub stack: u32,
}

impl BettingContext {
    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.committed)
    }
}

/// An action that passed validation, with the chips it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    /// Opening bet: chips committed, which is also the new current bet
    Bet(u32),
    /// Chips committed and the round's new current bet
    Raise { amount: u32, new_bet: u32 },
}

impl ValidatedAction {
    /// Chips the action moves from the stack into the pot.
    pub fn amount(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(a) | ValidatedAction::Bet(a) => a,
            ValidatedAction::Raise { amount, .. } => amount,
        }
    }

    pub fn is_aggressive(&self) -> bool {
        matches!(self, ValidatedAction::Bet(_) | ValidatedAction::Raise { .. })
    }
}

/// Validates a betting action under fixed-limit rules.
///
/// The opening `bet` counts as one raise toward the cap, so both `bet` and
/// `raise` are refused once `raise_count` reaches `cap`. Blinds never count.
///
/// # Errors
///
/// - [`GameError::IllegalAction`] when the action is not legal in this spot
/// - [`GameError::InsufficientChips`] when the seat cannot cover the commitment
///   (reported with seat 0; callers that know the seat rewrite it)
///
/// # Examples
///
/// ```
/// use lowball_engine::rules::{validate_action, BetAction, BettingContext, ValidatedAction};
///
/// let ctx = BettingContext { current_bet: 2, committed: 0, raise_count: 0, cap: 4, unit: 1, stack: 100 };
/// assert_eq!(validate_action(&ctx, BetAction::Call), Ok(ValidatedAction::Call(2)));
/// assert_eq!(
///     validate_action(&ctx, BetAction::Raise),
///     Ok(ValidatedAction::Raise { amount: 3, new_bet: 3 })
/// );
/// assert!(validate_action(&ctx, BetAction::Check).is_err());
/// ```
pub fn validate_action(
    ctx: &BettingContext,
    action: BetAction,
) -> Result<ValidatedAction, GameError> {
    let illegal = |reason| GameError::IllegalAction { action, reason };
    let to_call = ctx.to_call();
    let validated = match action {
        BetAction::Fold => ValidatedAction::Fold,
        BetAction::Check => {
            if to_call > 0 {
                return Err(illegal(IllegalReason::CheckFacingBet));
            }
            ValidatedAction::Check
        }
        BetAction::Call => {
            if to_call == 0 {
                return Err(illegal(IllegalReason::NothingToCall));
            }
            ValidatedAction::Call(to_call)
        }
        BetAction::Bet => {
            if ctx.current_bet != 0 {
                return Err(illegal(IllegalReason::BetAlreadyOpen));
            }
            if ctx.raise_count >= ctx.cap {
                return Err(illegal(IllegalReason::CapReached));
            }
            ValidatedAction::Bet(ctx.unit.saturating_sub(ctx.committed))
        }
        BetAction::Raise => {
            if ctx.current_bet == 0 {
                return Err(illegal(IllegalReason::NothingToRaise));
            }
            if ctx.raise_count >= ctx.cap {
                return Err(illegal(IllegalReason::CapReached));
            }
            let new_bet = ctx.current_bet + ctx.unit;
            ValidatedAction::Raise {
                amount: new_bet - ctx.committed,
                new_bet,
            }
        }
    };
    if validated.amount() > ctx.stack {
        return Err(GameError::InsufficientChips {
            seat: 0,
            needed: validated.amount(),
            stack: ctx.stack,
        });
    }
    Ok(validated)
}

/// The subset of [`BetAction::ALL`] that [`validate_action`] accepts.
pub fn legal_actions(ctx: &BettingContext) -> Vec<BetAction> {
    BetAction::ALL
        .into_iter()
        .filter(|&a| validate_action(ctx, a).is_ok())
        .collect()
}
