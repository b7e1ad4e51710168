//! JSON wire types for the deck service HTTP surface.
//!
//! Shared by the server handlers and the client SDK so both sides agree on
//! field names and encodings.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Acknowledgment message returned by a successful shuffle.
pub const SHUFFLE_MESSAGE: &str = "Deck shuffled successfully";

/// Response to deck creation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckCreated {
    #[serde(rename = "deckId")]
    pub deck_id: String,
}

/// Response to a shuffle request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShuffleAck {
    pub message: String,
}

/// The remaining cards of a deck, bottom first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckCards {
    pub cards: Vec<Card>,
}

/// A single drawn card.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawnCard {
    pub card: Card,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
