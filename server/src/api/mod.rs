//! HTTP surface of the deck service.

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::registry::Registry;

mod http;

pub struct Api {
    registry: Arc<Registry>,
    static_dir: String,
}

impl Api {
    pub fn new(registry: Arc<Registry>, static_dir: impl Into<String>) -> Self {
        Self {
            registry,
            static_dir: static_dir.into(),
        }
    }

    /// Builds the router: the four deck routes, a liveness probe, and a
    /// static-file fallback for the companion front end.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        Router::new()
            .route("/temp/deck", post(http::create_deck))
            .route("/temp/deck/shuffle/:deck_id", patch(http::shuffle_deck))
            .route("/temp/deck/:deck_id", get(http::get_deck))
            .route("/temp/deck/:deck_id/card", get(http::draw_card))
            .route("/healthz", get(http::healthz))
            .fallback_service(ServeDir::new(&self.static_dir))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.registry.clone())
    }
}
