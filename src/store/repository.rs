//! The authoritative decks collection and its mutations.
//!
//! Every mutation follows the same cycle: snapshot the collection, modify
//! the snapshot, save it, and only then make it the current collection. A
//! failed save leaves the in-memory collection exactly as it was.
//!
//! Lookup misses (unknown deck name, stale card index) are not errors: the
//! mutation reports `Ok(false)` / `Ok(None)` and nothing is saved.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use super::{DeckStore, Decks};
use crate::cards::{apply_swipe_outcome, Card, Deck, SwipeDirection};
use crate::core::{FlipcardsError, Result};

/// Decks collection backed by a [`DeckStore`].
///
/// ## Example
///
/// ```
/// use flipcards::store::{MemoryStore, Repository};
///
/// let mut repo = Repository::open(MemoryStore::new()).unwrap();
/// repo.create_deck("Spanish").unwrap();
/// assert!(repo.add_card("Spanish", "hola", "hello").unwrap());
///
/// assert_eq!(repo.deck("Spanish").unwrap().cards.len(), 1);
/// ```
#[derive(Debug)]
pub struct Repository<S> {
    store: S,
    decks: Decks,
}

impl<S: DeckStore> Repository<S> {
    /// Load the collection from `store`.
    pub fn open(store: S) -> Result<Self> {
        let decks = store.load()?;
        info!(decks = decks.len(), "Opened deck repository");

        let mut seen = FxHashSet::default();
        for deck in &decks {
            if !seen.insert(deck.name.as_str()) {
                warn!(deck = %deck.name, "Stored collection has a duplicate deck name; the first one wins");
            }
        }

        Ok(Self { store, decks })
    }

    /// The current collection.
    #[must_use]
    pub fn decks(&self) -> &Decks {
        &self.decks
    }

    /// Deck named `name`.
    #[must_use]
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.name == name)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Add an empty deck.
    ///
    /// Fails on a blank name or a name that is already taken.
    pub fn create_deck(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(FlipcardsError::BlankField("deck name"));
        }
        if self.deck(name).is_some() {
            return Err(FlipcardsError::DuplicateDeck(name.to_string()));
        }

        let mut updated = self.decks.clone();
        updated.push_back(Deck::new(name));
        self.commit(updated)?;
        info!(deck = name, "Created deck");
        Ok(())
    }

    /// Remove the deck named `name`.
    pub fn delete_deck(&mut self, name: &str) -> Result<bool> {
        let Some(index) = self.position(name) else {
            warn!(deck = name, "Delete of unknown deck ignored");
            return Ok(false);
        };

        let mut updated = self.decks.clone();
        updated.remove(index);
        self.commit(updated)?;
        info!(deck = name, "Deleted deck");
        Ok(true)
    }

    /// Replace the stored deck that has the same name as `deck`.
    pub fn replace_deck(&mut self, deck: Deck) -> Result<bool> {
        let name = deck.name.clone();
        self.modify_deck(&name, |existing| {
            *existing = deck;
            Some(())
        })
        .map(|changed| changed.is_some())
    }

    /// Append a new, unreviewed card to a deck.
    ///
    /// Title and description must both be non-blank.
    pub fn add_card(&mut self, deck_name: &str, title: &str, description: &str) -> Result<bool> {
        if title.trim().is_empty() {
            return Err(FlipcardsError::BlankField("card title"));
        }
        if description.trim().is_empty() {
            return Err(FlipcardsError::BlankField("card description"));
        }

        let card = Card::new(title, description);
        self.modify_deck(deck_name, |deck| {
            deck.add_card(card);
            Some(())
        })
        .map(|changed| changed.is_some())
    }

    /// Remove the card at `index` from a deck and return it.
    pub fn delete_card(&mut self, deck_name: &str, index: usize) -> Result<Option<Card>> {
        self.modify_deck(deck_name, |deck| deck.remove_card(index))
    }

    /// Clear the review history of every card in a deck.
    pub fn reset_stats(&mut self, deck_name: &str) -> Result<bool> {
        self.modify_deck(deck_name, |deck| {
            deck.reset_stats();
            Some(())
        })
        .map(|changed| changed.is_some())
    }

    /// Count a committed swipe on the card at `index`.
    pub fn record_swipe(
        &mut self,
        deck_name: &str,
        index: usize,
        direction: SwipeDirection,
    ) -> Result<bool> {
        self.modify_deck(deck_name, |deck| {
            deck.card(index)?;
            *deck = apply_swipe_outcome(deck, index, direction);
            Some(())
        })
        .map(|changed| changed.is_some())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.decks.iter().position(|d| d.name == name)
    }

    /// Apply `f` to a snapshot of the named deck and persist the result.
    ///
    /// `f` returning `None` means its target was missing; nothing is saved.
    fn modify_deck<T>(
        &mut self,
        name: &str,
        f: impl FnOnce(&mut Deck) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(index) = self.position(name) else {
            warn!(deck = name, "Update of unknown deck ignored");
            return Ok(None);
        };

        let mut updated = self.decks.clone();
        let Some(output) = f(&mut updated[index]) else {
            warn!(deck = name, "Update target missing in deck; ignored");
            return Ok(None);
        };

        self.commit(updated)?;
        Ok(Some(output))
    }

    fn commit(&mut self, updated: Decks) -> Result<()> {
        self.store.save(&updated)?;
        self.decks = updated;
        debug!(decks = self.decks.len(), "Committed decks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn repo_with_deck() -> Repository<MemoryStore> {
        let mut repo = Repository::open(MemoryStore::new()).unwrap();
        repo.create_deck("Spanish").unwrap();
        repo.add_card("Spanish", "uno", "one").unwrap();
        repo.add_card("Spanish", "dos", "two").unwrap();
        repo
    }

    #[test]
    fn test_create_deck_persists() {
        let repo = repo_with_deck();
        let reloaded = repo.store().load().unwrap();
        assert_eq!(&reloaded, repo.decks());
        assert_eq!(reloaded[0].cards.len(), 2);
    }

    #[test]
    fn test_create_deck_rejects_blank_and_duplicates() {
        let mut repo = repo_with_deck();

        assert!(matches!(repo.create_deck("   "), Err(FlipcardsError::BlankField(_))));
        assert!(matches!(
            repo.create_deck("Spanish"),
            Err(FlipcardsError::DuplicateDeck(name)) if name == "Spanish"
        ));
        assert_eq!(repo.decks().len(), 1);
    }

    #[test]
    fn test_add_card_validation() {
        let mut repo = repo_with_deck();

        assert!(matches!(
            repo.add_card("Spanish", "", "x"),
            Err(FlipcardsError::BlankField("card title"))
        ));
        assert!(matches!(
            repo.add_card("Spanish", "x", " \n"),
            Err(FlipcardsError::BlankField("card description"))
        ));
        assert!(!repo.add_card("French", "x", "y").unwrap());
        assert_eq!(repo.deck("Spanish").unwrap().len(), 2);
    }

    #[test]
    fn test_record_swipe() {
        let mut repo = repo_with_deck();

        assert!(repo.record_swipe("Spanish", 1, SwipeDirection::Left).unwrap());
        assert_eq!(repo.deck("Spanish").unwrap().cards[1].left_swipes, 1);
        assert_eq!(repo.store().load().unwrap()[0].cards[1].left_swipes, 1);

        // Misses change nothing
        let before = repo.store().raw().map(<[u8]>::to_vec);
        assert!(!repo.record_swipe("Spanish", 2, SwipeDirection::Left).unwrap());
        assert!(!repo.record_swipe("German", 0, SwipeDirection::Left).unwrap());
        assert_eq!(repo.store().raw().map(<[u8]>::to_vec), before);
    }

    #[test]
    fn test_delete_card() {
        let mut repo = repo_with_deck();

        let removed = repo.delete_card("Spanish", 0).unwrap();
        assert_eq!(removed.map(|c| c.title), Some("uno".to_string()));
        assert_eq!(repo.deck("Spanish").unwrap().cards[0].title, "dos");

        assert_eq!(repo.delete_card("Spanish", 4).unwrap(), None);
    }

    #[test]
    fn test_reset_stats() {
        let mut repo = repo_with_deck();
        repo.record_swipe("Spanish", 0, SwipeDirection::Right).unwrap();

        assert!(repo.reset_stats("Spanish").unwrap());
        assert!(repo.deck("Spanish").unwrap().cards.iter().all(|c| c.total_swipes() == 0));
        assert!(!repo.reset_stats("nope").unwrap());
    }

    #[test]
    fn test_replace_and_delete_deck() {
        let mut repo = repo_with_deck();
        repo.create_deck("French").unwrap();

        let replacement = Deck::new("French").with_card(Card::new("un", "one"));
        assert!(repo.replace_deck(replacement.clone()).unwrap());
        assert_eq!(repo.deck("French"), Some(&replacement));
        assert!(!repo.replace_deck(Deck::new("German")).unwrap());

        assert!(repo.delete_deck("Spanish").unwrap());
        assert!(!repo.delete_deck("Spanish").unwrap());
        assert_eq!(repo.decks().len(), 1);
        assert_eq!(repo.into_store().load().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let mut store = MemoryStore::new();
        store
            .save(&im::vector![
                Deck::new("d").with_card(Card::new("first", "1")),
                Deck::new("d").with_card(Card::new("second", "2")),
            ])
            .unwrap();

        let repo = Repository::open(store).unwrap();
        assert_eq!(repo.deck("d").unwrap().cards[0].title, "first");
    }
}
