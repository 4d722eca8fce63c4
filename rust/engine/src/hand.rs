use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Number of cards in a deuce-to-seven hand.
pub const HAND_SIZE: usize = 5;

/// Comparison key of a 5-card hand under deuce-to-seven lowball.
///
/// `badness` counts the disqualifying features (straight, flush, any pair or
/// better) and `ranks` holds the rank indices (Two = 0 .. Ace = 12) sorted
/// high to low. Keys compare lexicographically: a smaller key is a better hand.
///
/// Hands that share a badness level are ordered by their highest cards
/// only; pair structures are not tie-broken separately.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct LowballKey {
    pub badness: u8,
    pub ranks: [u8; HAND_SIZE],
}

impl LowballKey {
    /// Sum of the rank indices, used by the autoplay strength score.
    pub fn rank_sum(&self) -> u32 {
        self.ranks.iter().map(|&r| r as u32).sum()
    }

    /// True for a hand without pair, straight or flush.
    pub fn is_clean(&self) -> bool {
        self.badness == 0
    }
}

impl fmt::Display for LowballKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks: Vec<String> = self
            .ranks
            .iter()
            .map(|&r| Rank::from_u8(r + 2).symbol().to_string())
            .collect();
        write!(f, "{} (badness {})", ranks.join("-"), self.badness)
    }
}

pub fn evaluate_lowball(hand: &[Card; HAND_SIZE]) -> LowballKey {
    let badness = is_straight(hand) as u8 + is_flush(hand) as u8 + has_pair(hand) as u8;
    let mut ranks = hand.map(|c| c.rank.low_index());
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    LowballKey { badness, ranks }
}

/// Orders two hands: `Ordering::Less` means `a` is the better (lower) hand.
pub fn compare_lowball(a: &[Card; HAND_SIZE], b: &[Card; HAND_SIZE]) -> Ordering {
    evaluate_lowball(a).cmp(&evaluate_lowball(b))
}

/// Five ranks forming one unbroken run. The Ace only plays high.
pub fn is_straight(hand: &[Card; HAND_SIZE]) -> bool {
    let mut v = hand.map(|c| c.rank as u8);
    v.sort_unstable();
    v.windows(2).all(|w| w[1] == w[0] + 1)
}

pub fn is_flush(hand: &[Card; HAND_SIZE]) -> bool {
    hand.iter().all(|c| c.suit == hand[0].suit)
}

pub fn has_pair(hand: &[Card; HAND_SIZE]) -> bool {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for c in hand {
        rank_counts[c.rank as usize] += 1;
    }
    rank_counts.iter().any(|&n| n > 1)
}
