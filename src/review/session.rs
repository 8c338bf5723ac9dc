//! Review session: the cursor over one deck while cards are being swiped.
//!
//! The session tracks two positional indices: `current`, the card on top,
//! and `next`, the card already chosen to follow it (shown underneath while
//! the top card is dragged). A committed swipe:
//!
//! 1. increments the top card's counter and persists the whole collection
//! 2. promotes `next` to `current`
//! 3. picks a new `next` from the freshly saved counters
//!
//! so a swipe influences the pick after the one already on screen, never
//! the one already on screen.

use tracing::debug;

use super::selection::select_next;
use crate::cards::{Card, Deck, Settle};
use crate::core::{FlipcardsError, RandomSource, Result, ReviewConfig, ReviewRng};
use crate::store::{DeckStore, Repository};

/// Swipe-review state for one deck.
///
/// ## Example
///
/// ```
/// use flipcards::cards::Settle;
/// use flipcards::core::ReviewRng;
/// use flipcards::review::ReviewSession;
/// use flipcards::store::{MemoryStore, Repository};
///
/// let mut repo = Repository::open(MemoryStore::new()).unwrap();
/// repo.create_deck("Spanish").unwrap();
/// repo.add_card("Spanish", "uno", "one").unwrap();
/// repo.add_card("Spanish", "dos", "two").unwrap();
///
/// let mut session = ReviewSession::open(repo, "Spanish", ReviewRng::new(7)).unwrap();
/// assert_eq!(session.cursor(), (0, 1));
///
/// assert!(session.settle(Settle::Left).unwrap());
/// assert_eq!(session.current_index(), 1);
/// assert_eq!(session.deck().unwrap().cards[0].left_swipes, 1);
/// ```
#[derive(Debug)]
pub struct ReviewSession<S, R> {
    repository: Repository<S>,
    deck_name: String,
    current: usize,
    next: usize,
    rng: R,
}

impl<S: DeckStore, R: RandomSource> ReviewSession<S, R> {
    /// Start reviewing `deck_name`.
    ///
    /// The first card shown is index 0, followed by index 1 when there is one.
    pub fn open(repository: Repository<S>, deck_name: impl Into<String>, rng: R) -> Result<Self> {
        let deck_name = deck_name.into();
        let len = match repository.deck(&deck_name) {
            Some(deck) => deck.len(),
            None => return Err(FlipcardsError::DeckNotFound(deck_name)),
        };

        Ok(Self {
            repository,
            deck_name,
            current: 0,
            next: if len > 1 { 1 } else { 0 },
            rng,
        })
    }

    #[must_use]
    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    /// The deck as currently persisted.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.repository.deck(&self.deck_name)
    }

    /// `(current, next)` indices.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.current, self.next)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Card on top, if the deck has any.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.deck()?.card(self.current)
    }

    /// Card queued to follow the top card.
    #[must_use]
    pub fn next_card(&self) -> Option<&Card> {
        self.deck()?.card(self.next)
    }

    #[must_use]
    pub fn repository(&self) -> &Repository<S> {
        &self.repository
    }

    pub fn into_repository(self) -> Repository<S> {
        self.repository
    }

    /// Handle a released drag.
    ///
    /// `Center` is a cancelled swipe and does nothing. `Left`/`Right` record
    /// the swipe on the current card, persist, and advance the cursor.
    /// Returns whether anything changed. On a save error the session is
    /// left as it was.
    pub fn settle(&mut self, settle: Settle) -> Result<bool> {
        let Some(direction) = settle.direction() else {
            debug!(deck = %self.deck_name, "Swipe settled at center");
            return Ok(false);
        };

        if !self
            .repository
            .record_swipe(&self.deck_name, self.current, direction)?
        {
            return Ok(false);
        }

        self.current = self.next;
        self.next = self.pick_next();
        debug!(
            deck = %self.deck_name,
            ?direction,
            current = self.current,
            next = self.next,
            "Advanced review cursor"
        );
        Ok(true)
    }

    /// Delete the card on top and return it.
    ///
    /// If the deleted card was the last one, the cursor moves back to the
    /// new last card (or 0 for an emptied deck).
    pub fn delete_current_card(&mut self) -> Result<Option<Card>> {
        let Some(removed) = self.repository.delete_card(&self.deck_name, self.current)? else {
            return Ok(None);
        };

        let len = self.deck().map_or(0, Deck::len);
        if self.current >= len {
            self.current = len.saturating_sub(1);
        }
        self.next = self.pick_next();
        Ok(Some(removed))
    }

    /// Add a card to the deck under review.
    pub fn add_card(&mut self, title: &str, description: &str) -> Result<bool> {
        let added = self.repository.add_card(&self.deck_name, title, description)?;
        if added {
            self.next = self.pick_next();
        }
        Ok(added)
    }

    /// Clear the review history of the deck under review.
    pub fn reset_stats(&mut self) -> Result<bool> {
        let reset = self.repository.reset_stats(&self.deck_name)?;
        if reset {
            self.next = self.pick_next();
        }
        Ok(reset)
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    fn pick_next(&mut self) -> usize {
        let cards = self
            .repository
            .deck(&self.deck_name)
            .map_or(&[][..], |deck| deck.cards.as_slice());
        select_next(cards, self.current, &mut self.rng)
    }
}

impl<S: DeckStore> ReviewSession<S, ReviewRng> {
    /// Start reviewing with an RNG seeded from `config`.
    pub fn with_config(
        repository: Repository<S>,
        deck_name: impl Into<String>,
        config: &ReviewConfig,
    ) -> Result<Self> {
        let rng = ReviewRng::from_seed_or_entropy(config.seed);
        debug!(seed = rng.seed(), "Seeded review session");
        Self::open(repository, deck_name, rng)
    }
}
