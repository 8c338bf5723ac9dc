//! Card system: cards, decks, and swipe outcomes.
//!
//! ## Key Types
//!
//! - `Card`: title, description, and left/right swipe counters
//! - `Deck`: named, ordered sequence of cards
//! - `SwipeDirection`: a committed swipe (left = not remembered)
//! - `Settle`: where a released drag came to rest, including the
//!   cancelled `Center` case

pub mod card;
pub mod deck;

pub use card::{Card, Settle, SwipeDirection};
pub use deck::{apply_swipe_outcome, CardStats, Deck};
