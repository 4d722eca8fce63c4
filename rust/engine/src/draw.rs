use std::collections::HashSet;

use crate::cards::Card;
use crate::engine::Table;
use crate::errors::{DrawViolation, GameError};
use crate::game::{Phase, PhaseKind};
use crate::logger::{ActionRecord, HandAction};
use crate::player::SeatId;

/// Most cards a seat may replace in one draw.
pub const MAX_DISCARDS: usize = 3;

impl Table {
    /// Replaces `discards` in `seat`'s hand with fresh cards from the deck.
    ///
    /// Replacements are dealt before the discards reach the discard pile, so a
    /// seat never draws back its own cards. When every seat still in the hand
    /// has drawn, the next street's betting round opens with the first live
    /// seat after the button.
    ///
    /// Returns the number of cards replaced; an empty slice stands pat.
    pub fn draw(&mut self, seat: SeatId, discards: &[Card]) -> Result<usize, GameError> {
        let Phase::Draw(draw_round) = self.phase else {
            return Err(GameError::WrongPhase {
                expected: PhaseKind::Draw,
                actual: self.phase.kind(),
            });
        };
        let Some(drawing) = self.seats.get(seat) else {
            return Err(GameError::UnknownSeat(seat));
        };
        let violation = |violation| GameError::IllegalDraw { seat, violation };
        if drawing.draws_remaining() == 0 {
            return Err(violation(DrawViolation::NoDrawRemaining));
        }
        self.check_turn(seat)?;

        if discards.len() > MAX_DISCARDS {
            return Err(violation(DrawViolation::TooManyDiscards {
                count: discards.len(),
                max: MAX_DISCARDS,
            }));
        }
        let hand = drawing
            .hand()
            .ok_or(GameError::InsufficientState("seat in hand without cards"))?;
        let mut seen = HashSet::with_capacity(discards.len());
        for &card in discards {
            if !seen.insert(card) {
                return Err(violation(DrawViolation::DuplicateDiscard(card)));
            }
            if !hand.contains(&card) {
                return Err(violation(DrawViolation::CardNotInHand(card)));
            }
        }

        let replacements = self.deck.draw_n(discards.len())?;
        self.seats[seat].replace_cards(discards, &replacements);
        self.deck.discard(discards.iter().copied());
        self.history.push(ActionRecord {
            seat,
            street: draw_round.street,
            action: HandAction::Draw(discards.len() as u8),
        });
        tracing::debug!(table_id = %self.id, seat, count = discards.len(), "seat drew");

        self.on_turn = self.next_live_after(seat);
        if self.on_turn == draw_round.started_by {
            match draw_round.street.next() {
                Some(next) => self.open_betting_round(next),
                None => {
                    return Err(GameError::InsufficientState(
                        "draw phase after the final street",
                    ))
                }
            }
        }
        Ok(discards.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::parse_cards;
    use crate::config::TableConfig;
    use crate::engine::Table;
    use crate::errors::{DrawViolation, GameError};
    use crate::game::PhaseKind;
    use crate::logger::Street;
    use crate::rules::BetAction;

    fn table_in_first_draw() -> Table {
        let config = TableConfig {
            seats: 3,
            seed: Some(11),
            ..TableConfig::default()
        };
        let mut table = Table::new("draw".to_string(), config).unwrap();
        table.deal().unwrap();
        // button 0, sb 1, bb 2: seat 0 opens, bb closes with a check
        table.act(0, BetAction::Call).unwrap();
        table.act(1, BetAction::Call).unwrap();
        table.act(2, BetAction::Check).unwrap();
        assert_eq!(table.phase().kind(), PhaseKind::Draw);
        table
    }

    #[test]
    fn draw_phase_starts_left_of_button() {
        let table = table_in_first_draw();
        assert_eq!(table.on_turn(), 1);
    }

    #[test]
    fn rejects_cards_not_in_hand_and_leaves_state_alone() {
        let mut table = table_in_first_draw();
        let hand = *table.seat(1).unwrap().hand().unwrap();
        let outsider = table.deck().cards()[0];
        let before = table.deck().remaining();
        let err = table.draw(1, &[outsider]).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalDraw {
                seat: 1,
                violation: DrawViolation::CardNotInHand(outsider)
            }
        );
        assert_eq!(table.seat(1).unwrap().hand().unwrap(), &hand);
        assert_eq!(table.deck().remaining(), before);
    }

    #[test]
    fn rejects_four_discards_and_duplicates() {
        let mut table = table_in_first_draw();
        let hand = *table.seat(1).unwrap().hand().unwrap();
        assert!(matches!(
            table.draw(1, &hand[..4]),
            Err(GameError::IllegalDraw {
                violation: DrawViolation::TooManyDiscards { count: 4, max: 3 },
                ..
            })
        ));
        assert!(matches!(
            table.draw(1, &[hand[0], hand[0]]),
            Err(GameError::IllegalDraw {
                violation: DrawViolation::DuplicateDiscard(_),
                ..
            })
        ));
    }

    #[test]
    fn full_circuit_opens_next_street() {
        let mut table = table_in_first_draw();
        let hand = *table.seat(1).unwrap().hand().unwrap();
        assert_eq!(table.draw(1, &hand[..2]).unwrap(), 2);
        let kept = table.seat(1).unwrap().hand().unwrap();
        assert_eq!(&kept[2..], &hand[2..]);
        table.draw(2, &[]).unwrap();
        table.draw(0, &[]).unwrap();
        assert_eq!(table.phase().kind(), PhaseKind::Bet);
        assert_eq!(table.street(), Street::Post1);
        assert_eq!(table.on_turn(), 1);
        assert_eq!(table.deck().discard_count(), 2);
    }

    #[test]
    fn draw_during_betting_is_wrong_phase() {
        let config = TableConfig {
            seed: Some(3),
            ..TableConfig::default()
        };
        let mut table = Table::new("t".to_string(), config).unwrap();
        table.deal().unwrap();
        let card = parse_cards("2c").unwrap()[0];
        assert_eq!(
            table.draw(3, &[card]),
            Err(GameError::WrongPhase {
                expected: PhaseKind::Draw,
                actual: PhaseKind::Bet
            })
        );
    }
}
