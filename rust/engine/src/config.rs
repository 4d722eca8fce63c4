use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::HAND_SIZE;
use crate::player::{SeatId, STARTING_STACK};
use crate::rules::LimitConfig;

/// Smallest table that can run a hand.
pub const MIN_SEATS: usize = 2;
/// Largest table accepted by [`TableConfig::validate`]. A table-size choice;
/// the deck alone would allow nine seats.
pub const MAX_SEATS: usize = 8;

/// Forced bets posted by the two seats after the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 1, big: 2 }
    }
}

/// Everything needed to create a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub seats: usize,
    pub limits: LimitConfig,
    pub blinds: Blinds,
    pub starting_stack: u32,
    /// Deck RNG seed; a random one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// The seat driven by the caller; every other seat is autoplayed
    #[serde(default)]
    pub human_seat: Option<SeatId>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seats: 4,
            limits: LimitConfig::default(),
            blinds: Blinds::default(),
            starting_stack: STARTING_STACK,
            seed: None,
            human_seat: Some(0),
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| Err(GameError::InvalidConfig(msg));
        if !(MIN_SEATS..=MAX_SEATS).contains(&self.seats) {
            return invalid(format!(
                "seats must be between {} and {}, got {}",
                MIN_SEATS, MAX_SEATS, self.seats
            ));
        }
        if self.seats * HAND_SIZE > 52 {
            return invalid("not enough cards for every seat".to_string());
        }
        if self.limits.small_bet == 0 || self.limits.big_bet < self.limits.small_bet {
            return invalid(format!(
                "bet sizes must satisfy 0 < small_bet <= big_bet, got {}/{}",
                self.limits.small_bet, self.limits.big_bet
            ));
        }
        if self.blinds.big == 0 || self.blinds.small > self.blinds.big {
            return invalid(format!(
                "blinds must satisfy small <= big and big > 0, got {}/{}",
                self.blinds.small, self.blinds.big
            ));
        }
        if self.starting_stack < self.blinds.big {
            return invalid(format!(
                "starting stack {} cannot cover the big blind {}",
                self.starting_stack, self.blinds.big
            ));
        }
        if let Some(h) = self.human_seat {
            if h >= self.seats {
                return invalid(format!("human seat {} is not at a {}-seat table", h, self.seats));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(TableConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let too_many = TableConfig {
            seats: 9,
            ..TableConfig::default()
        };
        assert!(matches!(too_many.validate(), Err(GameError::InvalidConfig(_))));

        let inverted = TableConfig {
            limits: LimitConfig {
                small_bet: 4,
                big_bet: 2,
                cap: 4,
            },
            ..TableConfig::default()
        };
        assert!(inverted.validate().is_err());

        let lost_human = TableConfig {
            human_seat: Some(4),
            ..TableConfig::default()
        };
        assert!(lost_human.validate().is_err());

        let broke = TableConfig {
            starting_stack: 1,
            ..TableConfig::default()
        };
        assert!(broke.validate().is_err());
    }
}
