//! The deck registry: process-wide owner of all decks.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use cardroom_types::{Card, Deck, DeckError};
use uuid::Uuid;

/// Mapping from deck identifier to deck.
///
/// Identifiers are opaque UUID v4 strings generated at creation time; keys
/// are unique, immutable once assigned, and the mapping only grows (decks
/// live until the process exits).
///
/// Creation takes the map write lock; lookups take the read lock and clone
/// the per-deck handle, so the map lock is never held while a deck is
/// mutated. The per-deck mutex serializes shuffle and draw against each
/// other and against inspection, so no request observes a deck mid-draw.
pub struct Registry {
    decks: RwLock<HashMap<String, Arc<Mutex<Deck>>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            decks: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a fully populated deck and returns its fresh identifier.
    ///
    /// Identifiers are drawn from a 128-bit random space, so a collision
    /// with an existing key is not a practical concern.
    pub fn create(&self) -> String {
        let deck_id = Uuid::new_v4().to_string();
        let deck = Arc::new(Mutex::new(Deck::standard()));
        self.decks.write().unwrap().insert(deck_id.clone(), deck);
        deck_id
    }

    /// Uniformly reorders the remaining cards of the deck.
    ///
    /// Cards already drawn stay drawn; only what remains is permuted.
    pub fn shuffle(&self, deck_id: &str) -> Result<(), DeckError> {
        let deck = self.deck(deck_id)?;
        let mut deck = deck.lock().unwrap();
        deck.shuffle(&mut rand::thread_rng());
        Ok(())
    }

    /// Returns a snapshot of the cards not yet drawn.
    pub fn remaining(&self, deck_id: &str) -> Result<Vec<Card>, DeckError> {
        let deck = self.deck(deck_id)?;
        let deck = deck.lock().unwrap();
        Ok(deck.remaining().to_vec())
    }

    /// Draws the top card of the deck.
    pub fn draw(&self, deck_id: &str) -> Result<Card, DeckError> {
        let deck = self.deck(deck_id)?;
        let mut deck = deck.lock().unwrap();
        deck.draw().ok_or(DeckError::Exhausted)
    }

    fn deck(&self, deck_id: &str) -> Result<Arc<Mutex<Deck>>, DeckError> {
        let decks = self.decks.read().unwrap();
        decks.get(deck_id).cloned().ok_or(DeckError::NotFound)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
