//! Score-and-threshold heuristic for 2-7 triple draw.
//!
//! Hands are scored from their lowball key (lower is stronger) and compared
//! against three thresholds that tighten on the big-bet streets. Discards
//! break pairs first, then dump high cards, then the top card of a hand that
//! still threatens a straight or flush.

use std::collections::{BTreeMap, HashMap};

use crate::{AIOpponent, DecisionContext};
use lowball_engine::cards::{Card, Rank};
use lowball_engine::draw::MAX_DISCARDS;
use lowball_engine::hand::{evaluate_lowball, HAND_SIZE};
use lowball_engine::logger::Street;
use lowball_engine::rules::BetAction;

/// Weight of each badness point against the rank sum.
pub const BADNESS_WEIGHT: u32 = 120;
/// Scores below these thresholds are very strong, strong or playable.
pub const VERY_STRONG: u32 = 130;
pub const STRONG: u32 = 170;
pub const PLAYABLE: u32 = 215;

/// High cards dumped after pairs, in this order.
const HIGH_DISCARD_ORDER: [Rank; 7] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
];

/// Strength score of a hand; smaller is stronger.
pub fn strength_score(hand: &[Card; HAND_SIZE]) -> u32 {
    let key = evaluate_lowball(hand);
    key.badness as u32 * BADNESS_WEIGHT + key.rank_sum()
}

/// How much stricter every threshold gets on a street.
pub fn tightening(street: Street) -> u32 {
    match street {
        Street::Post3 => 10,
        Street::Post2 => 5,
        Street::Pre | Street::Post1 => 0,
    }
}

/// Four or more distinct ranks forming a run.
pub fn straight_risk(cards: &[Card]) -> bool {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank as u8).collect();
    ranks.sort_unstable();
    ranks.dedup();
    let mut best = 1;
    let mut run = 1;
    for pair in ranks.windows(2) {
        if pair[1] == pair[0] + 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }
    !ranks.is_empty() && best >= 4
}

/// Four or more cards of one suit.
pub fn flush_risk(cards: &[Card]) -> bool {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.suit).or_insert(0usize) += 1;
    }
    counts.values().any(|&n| n >= 4)
}

/// Picks up to three discards. Deterministic; standing pat is a valid result.
pub fn choose_discards(hand: &[Card; HAND_SIZE]) -> Vec<Card> {
    let mut remaining = hand.to_vec();
    let mut discards = Vec::with_capacity(MAX_DISCARDS);

    let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for &card in hand {
        by_rank.entry(card.rank).or_default().push(card);
    }
    // extra copies, highest pair first
    for cards in by_rank.values().rev().filter(|cards| cards.len() > 1) {
        for &card in cards[1..].iter().rev() {
            queue(card, &mut discards, &mut remaining);
        }
        if discards.len() >= MAX_DISCARDS {
            return discards;
        }
    }

    for rank in HIGH_DISCARD_ORDER {
        if let Some(&card) = remaining.iter().find(|c| c.rank == rank) {
            queue(card, &mut discards, &mut remaining);
            if discards.len() >= MAX_DISCARDS {
                return discards;
            }
        }
    }

    if straight_risk(&remaining) || flush_risk(&remaining) {
        if let Some(&top) = remaining.iter().max_by_key(|c| c.rank) {
            queue(top, &mut discards, &mut remaining);
        }
    }
    discards
}

fn queue(card: Card, discards: &mut Vec<Card>, remaining: &mut Vec<Card>) {
    if discards.len() < MAX_DISCARDS {
        discards.push(card);
        remaining.retain(|c| *c != card);
    }
}

/// Strength band of a hand once the street's tightening is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    VeryStrong,
    Strong,
    Playable,
    Weak,
}

pub fn tier(hand: &[Card; HAND_SIZE], street: Street) -> Tier {
    let score = strength_score(hand);
    let tighten = tightening(street);
    let below = |threshold: u32| score < threshold.saturating_sub(tighten);
    if below(VERY_STRONG) {
        Tier::VeryStrong
    } else if below(STRONG) {
        Tier::Strong
    } else if below(PLAYABLE) {
        Tier::Playable
    } else {
        Tier::Weak
    }
}

/// Betting decision from the hand's tier and the round's raise count.
pub fn decide(ctx: &DecisionContext) -> BetAction {
    let band = tier(&ctx.hand, ctx.street);
    if ctx.to_call == 0 {
        return if band == Tier::VeryStrong {
            BetAction::Bet
        } else {
            BetAction::Check
        };
    }
    match band {
        Tier::VeryStrong if ctx.raises_so_far == 0 => BetAction::Raise,
        Tier::VeryStrong | Tier::Strong | Tier::Playable if ctx.is_cheap() => BetAction::Call,
        _ => BetAction::Fold,
    }
}

/// Default autoplay opponent.
///
/// # Example
///
/// ```rust
/// use lowball_ai::baseline::BaselineAI;
/// use lowball_ai::AIOpponent;
/// use lowball_engine::cards::parse_cards;
///
/// let ai = BaselineAI::new();
/// let hand: [_; 5] = parse_cards("Kc Kd 7h 4s 2c").unwrap().try_into().unwrap();
/// assert_eq!(ai.choose_discards(&hand).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

impl AIOpponent for BaselineAI {
    fn decide_action(&self, ctx: &DecisionContext) -> BetAction {
        decide(ctx)
    }

    fn choose_discards(&self, hand: &[Card; HAND_SIZE]) -> Vec<Card> {
        choose_discards(hand)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
