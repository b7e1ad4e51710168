//! Deck state: cards remaining versus cards drawn.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, Rank, Suit, DECK_SIZE};

/// A deck of cards split into a `remaining` and a `drawn` sequence.
///
/// The union of the two sequences is always exactly the 52-card standard
/// set: shuffling permutes `remaining` in place and drawing moves one card
/// from the tail of `remaining` to the tail of `drawn`, so no card is ever
/// created, duplicated, or lost after construction.
///
/// A deck passes through three observable phases, in order: full (`drawn`
/// empty), partial, and exhausted (`remaining` empty). Shuffling is legal
/// in any phase; drawing fails once exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    remaining: Vec<Card>,
    drawn: Vec<Card>,
}

impl Deck {
    /// Creates a fully populated deck in fixed suit-major, rank-minor order.
    pub fn standard() -> Self {
        let mut remaining = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                remaining.push(Card::new(rank, suit));
            }
        }
        Self {
            remaining,
            drawn: Vec::new(),
        }
    }

    /// Uniformly permutes the remaining cards in place (Fisher-Yates).
    ///
    /// Only the cards still remaining are reordered: after partial drawing,
    /// a shuffle touches the rest of the deck and leaves `drawn` untouched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.remaining.shuffle(rng);
    }

    /// Draws the top card of the deck.
    ///
    /// The card is removed from the tail of `remaining` and appended to
    /// `drawn`. Returns `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.remaining.pop()?;
        self.drawn.push(card);
        Some(card)
    }

    /// Cards not yet drawn, bottom of the deck first.
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }

    /// Cards drawn so far, in draw order.
    pub fn drawn(&self) -> &[Card] {
        &self.drawn
    }

    /// Returns true once every card has been drawn.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
