//! Persistence for the decks collection.
//!
//! ## Contract
//!
//! - `load` returns the full collection, or an empty one if nothing has
//!   been stored yet
//! - `save` overwrites the full collection
//! - `load` after `save(decks)` returns a collection equal to `decks`
//!
//! [`Repository`] sits on top of a store and owns the one in-memory copy
//! of the collection that every mutation goes through.

pub mod codec;
pub mod file;
pub mod memory;
pub mod repository;

pub use codec::Codec;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::Repository;

use crate::cards::Deck;
use crate::core::Result;

/// The full decks collection.
///
/// Persistent vector: cloning is O(1), which keeps snapshot-then-save
/// updates cheap.
pub type Decks = im::Vector<Deck>;

/// A place the decks collection can be loaded from and saved to.
pub trait DeckStore {
    /// Read the full collection.
    fn load(&self) -> Result<Decks>;

    /// Replace the full collection.
    fn save(&mut self, decks: &Decks) -> Result<()>;
}

impl<S: DeckStore + ?Sized> DeckStore for Box<S> {
    fn load(&self) -> Result<Decks> {
        (**self).load()
    }

    fn save(&mut self, decks: &Decks) -> Result<()> {
        (**self).save(decks)
    }
}
