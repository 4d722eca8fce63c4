use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{fresh_deck, Card};
use crate::errors::GameError;

/// Shuffles `cards` in place (Fisher-Yates) with the supplied random source.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Draw pile plus the shared discard pile of one table.
///
/// Cards are dealt from the end of the draw pile. When the pile runs dry the
/// discard pile is shuffled and becomes the new draw pile.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    discards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: fresh_deck(),
            discards: Vec::new(),
            rng,
        }
    }

    /// Restores all 52 cards, shuffles them and empties the discard pile.
    pub fn shuffle(&mut self) {
        self.cards = fresh_deck();
        self.discards.clear();
        shuffle(&mut self.cards, &mut self.rng);
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            self.recycle_discards();
        }
        self.cards.pop()
    }

    /// Pops `n` cards, recycling the discard pile if the draw pile runs out.
    ///
    /// Fails without touching either pile when fewer than `n` cards exist in
    /// both piles together.
    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() + self.discards.len() {
            return Err(GameError::InsufficientState(
                "not enough cards left in deck and discard pile",
            ));
        }
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let card = self
                .deal_card()
                .ok_or(GameError::InsufficientState("deck exhausted mid-draw"))?;
            out.push(card);
        }
        Ok(out)
    }

    pub fn discard<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.discards.extend(cards);
    }

    fn recycle_discards(&mut self) {
        if self.discards.is_empty() {
            return;
        }
        tracing::debug!(count = self.discards.len(), "reshuffling discard pile into deck");
        self.cards.append(&mut self.discards);
        shuffle(&mut self.cards, &mut self.rng);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn discards(&self) -> &[Card] {
        &self.discards
    }
}
