//! Error type shared by the persistence and repository layers.
//!
//! Scoring and selection are total functions and never fail. Lookup misses
//! (unknown deck name, stale card index) are not errors either; mutations
//! report them as `Ok(false)`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipcardsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("{0} must not be blank")]
    BlankField(&'static str),

    #[error("Deck already exists: {0}")]
    DuplicateDeck(String),

    #[error("Deck not found: {0}")]
    DeckNotFound(String),
}

pub type Result<T> = std::result::Result<T, FlipcardsError>;
