//! # flipcards
//!
//! Core of a swipe-to-review flashcard app: decks of cards, a per-card
//! "remember score", and weighted-random selection of the next card.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Scoring and selection are plain functions. The only
//!    outside input is an injected [`RandomSource`], so every pick can be
//!    replayed in tests.
//!
//! 2. **Positional Cursors**: Cards are addressed by index into the deck's
//!    current card sequence. Anything that changes the sequence's shape
//!    recomputes the cursor.
//!
//! 3. **Whole-Collection Persistence**: Every mutation snapshots, saves, and
//!    then commits the full decks collection. A failed save changes nothing.
//!
//! ## Modules
//!
//! - `core`: errors, configuration, random sources
//! - `cards`: cards, decks, swipe outcomes
//! - `review`: remember score, next-card selection, review sessions
//! - `store`: codecs, key-value and file stores, the deck repository

pub mod cards;
pub mod core;
pub mod review;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    FlipcardsError, Result,
    RandomSource, ReviewRng, ScriptedDraws,
    ReviewConfig, StoreConfig,
};

pub use crate::cards::{apply_swipe_outcome, Card, CardStats, Deck, Settle, SwipeDirection};

pub use crate::review::{score, select_next, ReviewSession};

pub use crate::store::{Codec, DeckStore, Decks, FileStore, MemoryStore, Repository};
