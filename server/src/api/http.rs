use std::sync::Arc;

use axum::extract::{Path, State as AxumState};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use cardroom_types::api::{DeckCards, DeckCreated, DrawnCard, ErrorBody, ShuffleAck, SHUFFLE_MESSAGE};
use cardroom_types::DeckError;

use crate::registry::Registry;

/// Simple health response for basic liveness checks.
#[derive(Serialize)]
struct HealthzResponse {
    ok: bool,
}

pub(super) async fn healthz() -> Response {
    Json(HealthzResponse { ok: true }).into_response()
}

/// POST /temp/deck - create a fresh 52-card deck.
pub(super) async fn create_deck(AxumState(registry): AxumState<Arc<Registry>>) -> Response {
    let deck_id = registry.create();
    tracing::debug!(%deck_id, "deck created");
    (StatusCode::CREATED, Json(DeckCreated { deck_id })).into_response()
}

/// PATCH /temp/deck/shuffle/:deck_id - shuffle the remaining cards.
pub(super) async fn shuffle_deck(
    AxumState(registry): AxumState<Arc<Registry>>,
    Path(deck_id): Path<String>,
) -> Response {
    match registry.shuffle(&deck_id) {
        Ok(()) => Json(ShuffleAck {
            message: SHUFFLE_MESSAGE.to_string(),
        })
        .into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /temp/deck/:deck_id - inspect the remaining cards.
pub(super) async fn get_deck(
    AxumState(registry): AxumState<Arc<Registry>>,
    Path(deck_id): Path<String>,
) -> Response {
    match registry.remaining(&deck_id) {
        Ok(cards) => Json(DeckCards { cards }).into_response(),
        Err(err) => error_response(err),
    }
}

/// GET /temp/deck/:deck_id/card - draw the top card.
pub(super) async fn draw_card(
    AxumState(registry): AxumState<Arc<Registry>>,
    Path(deck_id): Path<String>,
) -> Response {
    match registry.draw(&deck_id) {
        Ok(card) => Json(DrawnCard { card }).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: DeckError) -> Response {
    let status = match err {
        DeckError::NotFound => StatusCode::NOT_FOUND,
        DeckError::Exhausted => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}
