//! Domain errors for deck operations.

use thiserror::Error;

/// Errors surfaced by deck registry operations.
///
/// Both are request-scoped, recoverable conditions; the `Display` strings
/// are the messages returned verbatim on the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Unknown deck identifier.
    #[error("Deck not found")]
    NotFound,
    /// Draw attempted with no cards remaining.
    #[error("No cards left in the deck")]
    Exhausted,
}
