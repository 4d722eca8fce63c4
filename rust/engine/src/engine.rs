use crate::cards::Card;
use crate::config::{TableConfig, MIN_SEATS};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{BettingRound, DrawRound, Phase, PhaseKind};
use crate::hand::HAND_SIZE;
use crate::logger::{ActionRecord, HandAction, Street};
use crate::player::{Seat, SeatId};
use crate::rules::{legal_actions, validate_action, BetAction, BettingContext, ValidatedAction};
use crate::view::{RoundStatus, SeatView};

/// One triple draw table: seats, deck, pot and the phase state machine.
///
/// A table is created once and reused across hands. Every operation checks
/// all of its preconditions before touching state, so an `Err` always leaves
/// the table exactly as it was.
///
/// # Examples
///
/// ```
/// use lowball_engine::config::TableConfig;
/// use lowball_engine::engine::Table;
/// use lowball_engine::rules::BetAction;
///
/// let config = TableConfig { seed: Some(7), ..TableConfig::default() };
/// let mut table = Table::new("t1".to_string(), config).unwrap();
/// table.deal().unwrap();
///
/// // 4 seats, button 0: seat 3 is first to act after the big blind
/// assert_eq!(table.on_turn(), 3);
/// assert_eq!(table.pot(), 3);
/// table.act(3, BetAction::Call).unwrap();
/// assert_eq!(table.pot(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    pub(crate) id: String,
    pub(crate) config: TableConfig,
    pub(crate) seats: Vec<Seat>,
    pub(crate) deck: Deck,
    pub(crate) seed: u64,
    pub(crate) button: SeatId,
    pub(crate) on_turn: SeatId,
    /// Chips committed this hand and not yet paid out
    pub(crate) pot: u32,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<ActionRecord>,
    pub(crate) hand_number: u32,
}

impl Table {
    pub fn new(id: String, config: TableConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let seats = (0..config.seats)
            .map(|i| Seat::new(i, config.starting_stack))
            .collect();
        Ok(Self {
            id,
            deck: Deck::new_with_seed(seed),
            seed,
            seats,
            button: 0,
            on_turn: 0,
            pot: 0,
            phase: Phase::Idle,
            history: Vec::new(),
            hand_number: 0,
            config,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn button(&self) -> SeatId {
        self.button
    }
    pub fn on_turn(&self) -> SeatId {
        self.on_turn
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn phase(&self) -> &Phase {
        &self.phase
    }
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn street(&self) -> Street {
        self.phase.street()
    }

    pub fn seat(&self, seat: SeatId) -> Option<&Seat> {
        self.seats.get(seat)
    }

    /// Bet/raise increment of the current street.
    pub fn bet_unit(&self) -> u32 {
        self.config.limits.bet_unit(self.street())
    }

    pub fn to_call(&self, seat: SeatId) -> u32 {
        self.phase
            .betting_round()
            .map(|round| round.to_call(seat))
            .unwrap_or(0)
    }

    pub fn live_seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.seats.iter().filter(|s| s.in_hand()).map(|s| s.id())
    }

    pub fn live_count(&self) -> usize {
        self.live_seats().count()
    }

    /// Total chips on the table: every stack plus the pot.
    pub fn chips_in_play(&self) -> u64 {
        self.seats.iter().map(|s| s.stack() as u64).sum::<u64>() + self.pot as u64
    }

    /// Every card currently accounted for: draw pile, discard pile and all dealt hands.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.deck.cards().to_vec();
        cards.extend_from_slice(self.deck.discards());
        for seat in &self.seats {
            if let Some(hand) = seat.hand() {
                cards.extend_from_slice(hand);
            }
        }
        cards
    }

    /// Next seat after `from` that is still in the hand, wrapping around.
    pub(crate) fn next_live_after(&self, from: SeatId) -> SeatId {
        let n = self.seats.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&i| self.seats[i].in_hand())
            .unwrap_or(from)
    }

    pub(crate) fn check_turn(&self, seat: SeatId) -> Result<(), GameError> {
        if seat != self.on_turn {
            return Err(GameError::WrongTurn {
                expected: self.on_turn,
                actual: seat,
            });
        }
        Ok(())
    }

    fn betting_context(&self, round: &BettingRound, seat: SeatId) -> BettingContext {
        BettingContext {
            current_bet: round.current_bet,
            committed: round.committed.get(seat).copied().unwrap_or(0),
            raise_count: round.raise_count,
            cap: self.config.limits.cap,
            unit: self.config.limits.bet_unit(round.street),
            stack: self.seats.get(seat).map(|s| s.stack()).unwrap_or(0),
        }
    }

    /// Legal betting actions for `seat`; empty unless it is that seat's betting turn.
    pub fn legal_actions(&self, seat: SeatId) -> Vec<BetAction> {
        match &self.phase {
            Phase::Bet(round) if seat == self.on_turn => {
                legal_actions(&self.betting_context(round, seat))
            }
            _ => Vec::new(),
        }
    }

    /// Starts a new hand: fresh shuffled deck, five cards per seat, blinds
    /// posted by the next two live seats after the button, turn to the live
    /// seat after the big blind.
    ///
    /// A seat whose stack cannot cover the big blind sits the hand out: no
    /// cards, no blind, never on turn. The deal is refused only when fewer
    /// than two seats can post.
    pub fn deal(&mut self) -> Result<(), GameError> {
        if self.phase.hand_in_progress() {
            return Err(GameError::WrongPhase {
                expected: PhaseKind::Idle,
                actual: self.phase.kind(),
            });
        }
        let blinds = self.config.blinds;
        let covering = self.seats.iter().filter(|s| s.stack() >= blinds.big).count();
        if covering < MIN_SEATS {
            let short = self
                .seats
                .iter()
                .find(|s| s.stack() < blinds.big)
                .ok_or(GameError::InsufficientState("short table without a short stack"))?;
            return Err(GameError::InsufficientChips {
                seat: short.id(),
                needed: blinds.big,
                stack: short.stack(),
            });
        }

        self.deck.shuffle();
        for seat in self.seats.iter_mut() {
            if seat.stack() < blinds.big {
                seat.sit_out();
                tracing::debug!(table_id = %self.id, seat = seat.id(), stack = seat.stack(), "seat sits out");
                continue;
            }
            let cards: [Card; HAND_SIZE] = self
                .deck
                .draw_n(HAND_SIZE)?
                .try_into()
                .map_err(|_| GameError::InsufficientState("deck produced a short hand"))?;
            seat.deal_in(cards);
        }
        self.history.clear();
        self.pot = 0;
        self.hand_number += 1;

        let sb_seat = self.next_live_after(self.button);
        let bb_seat = self.next_live_after(sb_seat);
        let first_to_act = self.next_live_after(bb_seat);
        let mut round = BettingRound::new(Street::Pre, self.seats.len(), first_to_act);
        for (seat, amount, action) in [
            (sb_seat, blinds.small, HandAction::SmallBlind(blinds.small)),
            (bb_seat, blinds.big, HandAction::BigBlind(blinds.big)),
        ] {
            self.seats[seat].commit(amount)?;
            self.pot += amount;
            round.post_blind(seat, amount);
            self.history.push(ActionRecord {
                seat,
                street: Street::Pre,
                action,
            });
        }
        self.on_turn = first_to_act;
        self.phase = Phase::Bet(round);

        tracing::debug!(
            table_id = %self.id,
            hand = self.hand_number,
            button = self.button,
            first_to_act,
            "hand dealt"
        );
        Ok(())
    }

    /// Applies a betting action for the seat on turn.
    pub fn act(&mut self, seat: SeatId, action: BetAction) -> Result<ValidatedAction, GameError> {
        let Phase::Bet(round) = &self.phase else {
            return Err(GameError::WrongPhase {
                expected: PhaseKind::Bet,
                actual: self.phase.kind(),
            });
        };
        self.check_turn(seat)?;
        let street = round.street;
        let validated = match validate_action(&self.betting_context(round, seat), action) {
            Err(GameError::InsufficientChips { needed, stack, .. }) => {
                return Err(GameError::InsufficientChips {
                    seat,
                    needed,
                    stack,
                })
            }
            other => other?,
        };

        let amount = validated.amount();
        self.seats[seat].commit(amount)?;
        self.pot += amount;
        if let Phase::Bet(round) = &mut self.phase {
            round.record(seat, &validated);
        }
        let record = match validated {
            ValidatedAction::Fold => {
                self.seats[seat].fold();
                HandAction::Fold
            }
            ValidatedAction::Check => HandAction::Check,
            ValidatedAction::Call(a) => HandAction::Call(a),
            ValidatedAction::Bet(a) => HandAction::Bet(a),
            ValidatedAction::Raise { amount, .. } => HandAction::Raise(amount),
        };
        self.history.push(ActionRecord {
            seat,
            street,
            action: record,
        });
        tracing::debug!(table_id = %self.id, seat, ?street, ?validated, "action applied");

        if self.live_count() == 1 {
            self.enter_showdown(street);
            return Ok(validated);
        }
        self.on_turn = self.next_live_after(seat);
        let closed = self
            .phase
            .betting_round()
            .is_some_and(|round| round.is_closed(self.live_seats()));
        if closed {
            self.close_betting_round(street);
        }
        Ok(validated)
    }

    fn close_betting_round(&mut self, street: Street) {
        if street == Street::Post3 {
            self.enter_showdown(street);
            return;
        }
        let started_by = self.next_live_after(self.button);
        for seat in self.seats.iter_mut() {
            seat.grant_draw();
        }
        self.on_turn = started_by;
        self.phase = Phase::Draw(DrawRound { street, started_by });
        tracing::debug!(table_id = %self.id, ?street, started_by, "draw phase opened");
    }

    pub(crate) fn open_betting_round(&mut self, street: Street) {
        let first_to_act = self.next_live_after(self.button);
        for seat in self.seats.iter_mut() {
            seat.clear_draw();
        }
        self.on_turn = first_to_act;
        self.phase = Phase::Bet(BettingRound::new(street, self.seats.len(), first_to_act));
        tracing::debug!(table_id = %self.id, ?street, first_to_act, "betting round opened");
    }

    fn enter_showdown(&mut self, street: Street) {
        for seat in self.seats.iter_mut() {
            seat.clear_draw();
        }
        if self.live_count() == 1 {
            let winner = self.live_seats().next();
            if let Some(winner) = winner {
                self.on_turn = winner;
            }
        }
        self.phase = Phase::Showdown { street };
        tracing::debug!(table_id = %self.id, ?street, live = self.live_count(), "showdown reached");
    }

    /// What `seat` may see of the table.
    pub fn view(&self, seat: SeatId) -> Result<SeatView, GameError> {
        let me = self.seat(seat).ok_or(GameError::UnknownSeat(seat))?;
        Ok(SeatView {
            table_id: self.id.clone(),
            seat,
            hand: me.hand().copied(),
            pot: self.pot,
            to_call: self.to_call(seat),
            street: self.street(),
            phase: self.phase.kind(),
            on_turn: self.on_turn,
            button: self.button,
            stacks: self.seats.iter().map(|s| s.stack()).collect(),
            in_hand: self.seats.iter().map(|s| s.in_hand()).collect(),
            history: self.history.clone(),
        })
    }

    pub fn inspect_round(&self) -> RoundStatus {
        let round = self.phase.betting_round();
        let draw_started_by = match &self.phase {
            Phase::Draw(draw) => Some(draw.started_by),
            _ => None,
        };
        RoundStatus {
            street: self.street(),
            phase: self.phase.kind(),
            pot: self.pot,
            current_bet: round.map(|r| r.current_bet).unwrap_or(0),
            raise_count: round.map(|r| r.raise_count).unwrap_or(0),
            cap: self.config.limits.cap,
            bet_unit: self.bet_unit(),
            committed: round
                .map(|r| r.committed.clone())
                .unwrap_or_else(|| vec![0; self.seats.len()]),
            on_turn: self.on_turn,
            first_to_act: round.map(|r| r.first_to_act),
            draw_started_by,
            deck_remaining: self.deck.remaining(),
            discard_count: self.deck.discard_count(),
        }
    }
}
