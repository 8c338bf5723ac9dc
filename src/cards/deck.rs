//! Decks: named, ordered card collections.
//!
//! Card order is significant. Review cursors and the next-card selector
//! address cards by position, so any insertion or removal invalidates
//! previously computed indices.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::card::{Card, SwipeDirection};

/// A named deck of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    /// Unique within a store. The repository enforces this.
    pub name: String,

    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Per-card row of a deck's statistics listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStats {
    pub title: String,
    pub score: u32,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Append a card (builder form).
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Append a card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, if the index is still valid.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Remove the card at `index`, shifting later cards down.
    ///
    /// Returns `None` (and leaves the deck untouched) for a stale index.
    pub fn remove_card(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Clear every card's review history.
    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            *card = card.reset();
        }
    }

    /// Remember score of every card, in deck order.
    #[must_use]
    pub fn stats(&self) -> Vec<CardStats> {
        self.cards
            .iter()
            .map(|card| CardStats {
                title: card.title.clone(),
                score: card.score(),
            })
            .collect()
    }
}

/// Apply a committed swipe to the card at `card_index`.
///
/// Returns a new deck with that card's counter for `direction` incremented
/// and every other card unchanged. A stale index yields an unchanged copy.
#[must_use]
pub fn apply_swipe_outcome(deck: &Deck, card_index: usize, direction: SwipeDirection) -> Deck {
    let mut updated = deck.clone();
    match updated.cards.get_mut(card_index) {
        Some(card) => *card = card.swiped(direction),
        None => warn!(
            deck = %deck.name,
            card_index,
            len = deck.cards.len(),
            "Swipe on a card index that no longer exists; ignored"
        ),
    }
    updated
}
