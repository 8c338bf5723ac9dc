//! File-backed store.
//!
//! The whole collection lives in one file. Saves go to a sibling temporary
//! file that is then renamed over the target, so readers only ever see the
//! previous collection or the new one.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{Codec, DeckStore, Decks};
use crate::core::{Result, StoreConfig};

/// Stores the decks collection in a single file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    codec: Codec,
}

impl FileStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>, codec: Codec) -> Self {
        Self {
            path: path.into(),
            codec,
        }
    }

    /// Store named after the configured key inside `dir`,
    /// e.g. `dir/decks_list.json`.
    pub fn in_dir(dir: impl AsRef<Path>, config: &StoreConfig) -> Self {
        let file_name = format!("{}.{}", config.key, config.codec.extension());
        Self::new(dir.as_ref().join(file_name), config.codec)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DeckStore for FileStore {
    fn load(&self) -> Result<Decks> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let decks = self.codec.decode(&bytes)?;
                info!(path = %self.path.display(), decks = decks.len(), "Loaded decks");
                Ok(decks)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored decks yet");
                Ok(Decks::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, decks: &Decks) -> Result<()> {
        let bytes = self.codec.encode(decks)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, &bytes)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }

        info!(path = %self.path.display(), decks = decks.len(), "Saved decks");
        Ok(())
    }
}
