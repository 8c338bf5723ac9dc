//! Encodings for the stored decks collection.

use serde::{Deserialize, Serialize};

use super::Decks;
use crate::cards::Deck;
use crate::core::Result;

/// How a decks collection is turned into bytes.
///
/// JSON keeps the field names of the app's existing preferences data
/// (`leftSwipes`, `rightSwipes`, ...). Bincode is compact and meant for
/// files only this crate reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Codec {
    #[default]
    Json,
    Bincode,
}

impl Codec {
    /// Encode the full collection.
    pub fn encode(self, decks: &Decks) -> Result<Vec<u8>> {
        let decks: Vec<&Deck> = decks.iter().collect();
        let bytes = match self {
            Codec::Json => serde_json::to_vec(&decks)?,
            Codec::Bincode => bincode::serialize(&decks)?,
        };
        Ok(bytes)
    }

    /// Decode a collection previously produced by [`Codec::encode`].
    pub fn decode(self, bytes: &[u8]) -> Result<Decks> {
        let decks: Vec<Deck> = match self {
            Codec::Json => serde_json::from_slice(bytes)?,
            Codec::Bincode => bincode::deserialize(bytes)?,
        };
        Ok(Decks::from(decks))
    }

    /// File extension used by [`super::FileStore::in_dir`].
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Codec::Json => "json",
            Codec::Bincode => "bin",
        }
    }
}
