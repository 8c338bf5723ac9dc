//! Configuration for stores and review sessions.

use serde::{Deserialize, Serialize};

use crate::store::Codec;

/// Key the whole decks collection is stored under.
pub const DEFAULT_STORE_KEY: &str = "decks_list";

/// Persistence configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key under which the encoded decks collection lives in a key-value store.
    pub key: String,

    /// Encoding used for the stored collection.
    pub codec: Codec,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORE_KEY.to_string(),
            codec: Codec::Json,
        }
    }
}

impl StoreConfig {
    /// Use a custom storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Use a different codec.
    #[must_use]
    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }
}

/// Review session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Seed for next-card selection.
    /// `None` picks a random seed per session.
    pub seed: Option<u64>,
}

impl ReviewConfig {
    /// Make card order reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let store = StoreConfig::default();
        assert_eq!(store.key, "decks_list");
        assert_eq!(store.codec, Codec::Json);

        assert_eq!(ReviewConfig::default().seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let store = StoreConfig::default()
            .with_key("spanish")
            .with_codec(Codec::Bincode);
        assert_eq!(store.key, "spanish");
        assert_eq!(store.codec, Codec::Bincode);

        assert_eq!(ReviewConfig::default().with_seed(123).seed, Some(123));
    }

    #[test]
    fn test_serialization() {
        let config = StoreConfig::default().with_codec(Codec::Bincode);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: StoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"codec":"Bincode"}"#).unwrap();
        assert_eq!(config.key, DEFAULT_STORE_KEY);
        assert_eq!(config.codec, Codec::Bincode);

        let review: ReviewConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(review.seed, None);
    }
}
