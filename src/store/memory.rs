//! In-memory key-value store.
//!
//! Holds encoded bytes rather than live values, so a load always goes
//! through the codec exactly as a persistent store would.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{DeckStore, Decks};
use crate::core::{Result, StoreConfig};

/// Opaque key-value store of encoded decks collections.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, Vec<u8>>,
    config: StoreConfig,
}

impl MemoryStore {
    /// Create an empty store with the default key and codec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a custom key and codec.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: FxHashMap::default(),
            config,
        }
    }

    /// Raw bytes stored under the configured key.
    #[must_use]
    pub fn raw(&self) -> Option<&[u8]> {
        self.entries.get(&self.config.key).map(Vec::as_slice)
    }

    /// Overwrite the raw bytes under the configured key.
    pub fn put_raw(&mut self, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(self.config.key.clone(), bytes.into());
    }
}

impl DeckStore for MemoryStore {
    fn load(&self) -> Result<Decks> {
        match self.entries.get(&self.config.key) {
            Some(bytes) => self.config.codec.decode(bytes),
            None => Ok(Decks::new()),
        }
    }

    fn save(&mut self, decks: &Decks) -> Result<()> {
        let bytes = self.config.codec.encode(decks)?;
        debug!(key = %self.config.key, bytes = bytes.len(), "Stored decks");
        self.entries.insert(self.config.key.clone(), bytes);
        Ok(())
    }
}
