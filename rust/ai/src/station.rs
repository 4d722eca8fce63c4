use crate::{AIOpponent, DecisionContext};
use lowball_engine::cards::Card;
use lowball_engine::hand::HAND_SIZE;
use lowball_engine::rules::BetAction;

/// Checks or calls every street and always stands pat.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl AIOpponent for CallingStation {
    fn decide_action(&self, ctx: &DecisionContext) -> BetAction {
        if ctx.to_call == 0 {
            BetAction::Check
        } else {
            BetAction::Call
        }
    }

    fn choose_discards(&self, _hand: &[Card; HAND_SIZE]) -> Vec<Card> {
        Vec::new()
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}
