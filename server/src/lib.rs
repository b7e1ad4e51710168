//! cardroom deck service.
//!
//! An in-memory HTTP service managing playing-card decks: create a deck,
//! shuffle it, inspect the remaining cards, and draw cards one at a time.
//! All state lives in a process-wide [`Registry`] constructed at startup
//! and shared with the request handlers; nothing survives a restart.

pub mod api;
mod config;
mod registry;

pub use api::Api;
pub use config::Config;
pub use registry::Registry;

#[cfg(test)]
mod tests;
