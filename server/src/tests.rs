use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use crate::{Api, Registry};

/// A deck service bound to an ephemeral port for wire-level assertions.
struct TestServer {
    base_url: String,
    server_handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start() -> Self {
        let registry = Arc::new(Registry::new());
        let api = Api::new(registry, "public");
        let router = api.router();

        let addr = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        let actual_addr = listener.local_addr().unwrap();
        let base_url = format!("http://{actual_addr}");

        let server_handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url,
            server_handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn create_deck(&self, http: &reqwest::Client) -> String {
        let response = http.post(self.url("/temp/deck")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = response.json().await.unwrap();
        body["deckId"].as_str().unwrap().to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

#[tokio::test]
async fn test_healthz() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();

    let response = http.get(server.url("/healthz")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["ok"], Value::Bool(true));
}

#[tokio::test]
async fn test_create_deck_returns_201_with_opaque_id() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();

    let first = server.create_deck(&http).await;
    let second = server.create_deck(&http).await;
    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_get_deck_returns_all_52_cards() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();
    let deck_id = server.create_deck(&http).await;

    let response = http
        .get(server.url(&format!("/temp/deck/{deck_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 52);
    // Fixed construction order: hearts 2..A first, spades A last.
    assert_eq!(cards[0]["rank"], "2");
    assert_eq!(cards[0]["suit"], "hearts");
    assert_eq!(cards[51]["rank"], "A");
    assert_eq!(cards[51]["suit"], "spades");
}

#[tokio::test]
async fn test_shuffle_acknowledges_and_preserves_cards() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();
    let deck_id = server.create_deck(&http).await;

    let response = http
        .patch(server.url(&format!("/temp/deck/shuffle/{deck_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Deck shuffled successfully");

    let response = http
        .get(server.url(&format!("/temp/deck/{deck_id}")))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 52);
    let unique: HashSet<String> = cards
        .iter()
        .map(|card| format!("{}-{}", card["rank"], card["suit"]))
        .collect();
    assert_eq!(unique.len(), 52);
}

#[tokio::test]
async fn test_draw_removes_card_from_deck() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();
    let deck_id = server.create_deck(&http).await;

    let response = http
        .get(server.url(&format!("/temp/deck/{deck_id}/card")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    // Top of an unshuffled deck is the last-constructed card.
    assert_eq!(body["card"]["rank"], "A");
    assert_eq!(body["card"]["suit"], "spades");

    let response = http
        .get(server.url(&format!("/temp/deck/{deck_id}")))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let cards = body["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 51);
    assert!(!cards
        .iter()
        .any(|card| card["rank"] == "A" && card["suit"] == "spades"));
}

#[tokio::test]
async fn test_unknown_deck_returns_404() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();
    server.create_deck(&http).await;

    for path in [
        "/temp/deck/does-not-exist",
        "/temp/deck/does-not-exist/card",
    ] {
        let response = http.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Deck not found");
    }

    let response = http
        .patch(server.url("/temp/deck/shuffle/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Deck not found");
}

#[tokio::test]
async fn test_deck_exhaustion_returns_400() {
    let server = TestServer::start().await;
    let http = reqwest::Client::new();
    let deck_id = server.create_deck(&http).await;

    http.patch(server.url(&format!("/temp/deck/shuffle/{deck_id}")))
        .send()
        .await
        .unwrap();

    let mut seen = HashSet::new();
    for _ in 0..52 {
        let response = http
            .get(server.url(&format!("/temp/deck/{deck_id}/card")))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        let card = format!("{}-{}", body["card"]["rank"], body["card"]["suit"]);
        assert!(seen.insert(card), "duplicate card drawn");
    }

    let response = http
        .get(server.url(&format!("/temp/deck/{deck_id}/card")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No cards left in the deck");
}
