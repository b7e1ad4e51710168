//! SDK for interacting with the cardroom deck service.
//!
//! Wraps the HTTP surface in typed async methods and maps the service's
//! two domain failures (unknown deck, exhausted deck) back to variants of
//! [`Error`].

use cardroom_types::api::{DeckCards, DeckCreated, DrawnCard, ShuffleAck};
use cardroom_types::Card;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Error type for client operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("deck not found")]
    DeckNotFound,
    #[error("no cards left in the deck")]
    DeckExhausted,
    #[error("failed: {status}: {body}")]
    FailedWithBody { status: StatusCode, body: String },
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed wrapper over the deck service HTTP surface.
pub struct Client {
    base: Url,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client for a service rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base: Url::parse(base_url)?,
            http: reqwest::Client::new(),
        })
    }

    /// Creates a fresh deck and returns its identifier.
    pub async fn create_deck(&self) -> Result<String> {
        let url = self.base.join("temp/deck")?;
        let response = check(self.http.post(url).send().await?).await?;
        Ok(response.json::<DeckCreated>().await?.deck_id)
    }

    /// Shuffles the remaining cards of the deck.
    pub async fn shuffle_deck(&self, deck_id: &str) -> Result<String> {
        let url = self.base.join(&format!("temp/deck/shuffle/{deck_id}"))?;
        let response = check(self.http.patch(url).send().await?).await?;
        Ok(response.json::<ShuffleAck>().await?.message)
    }

    /// Returns the cards not yet drawn from the deck.
    pub async fn get_deck(&self, deck_id: &str) -> Result<Vec<Card>> {
        let url = self.base.join(&format!("temp/deck/{deck_id}"))?;
        let response = check(self.http.get(url).send().await?).await?;
        Ok(response.json::<DeckCards>().await?.cards)
    }

    /// Draws the top card of the deck.
    pub async fn draw_card(&self, deck_id: &str) -> Result<Card> {
        let url = self.base.join(&format!("temp/deck/{deck_id}/card"))?;
        let response = check(self.http.get(url).send().await?).await?;
        Ok(response.json::<DrawnCard>().await?.card)
    }
}

/// Maps non-2xx responses to the matching error variant.
///
/// The service signals its two domain failures purely through status codes
/// (404 unknown deck, 400 exhausted deck); anything else is unexpected and
/// surfaced with its body.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::NOT_FOUND => Err(Error::DeckNotFound),
        StatusCode::BAD_REQUEST => Err(Error::DeckExhausted),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(Error::FailedWithBody { status, body })
        }
    }
}
