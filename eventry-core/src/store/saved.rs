//! The on-device saved-events set.
//!
//! A single JSON file holding the array of starred event IDs. The set is
//! owned entirely by the client and never synchronized to the server;
//! it is loaded once at startup and written back after every flip.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::Result;

pub struct SavedEvents {
    path: PathBuf,
    ids: HashSet<i64>,
}

impl SavedEvents {
    /// Load the set from `path`. A missing file is an empty set.
    pub fn load(path: PathBuf) -> Result<Self> {
        let ids = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let ids: Vec<i64> = serde_json::from_str(&contents).map_err(|e| {
                crate::error::Error::Serialization(format!(
                    "Failed to parse {}: {}",
                    path.display(),
                    e
                ))
            })?;
            ids.into_iter().collect()
        } else {
            HashSet::new()
        };

        Ok(SavedEvents { path, ids })
    }

    /// Load from the default on-device location.
    pub fn load_default() -> Result<Self> {
        Self::load(crate::config::AppConfig::saved_events_path()?)
    }

    pub fn contains(&self, event_id: i64) -> bool {
        self.ids.contains(&event_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `event_id` and persist the whole set synchronously.
    /// Returns the new membership. If the write fails the flip is undone, so
    /// memory and disk never disagree.
    pub fn toggle(&mut self, event_id: i64) -> Result<bool> {
        let now_saved = self.ids.insert(event_id);
        if !now_saved {
            self.ids.remove(&event_id);
        }

        if let Err(e) = self.persist() {
            // Undo the flip; the caller sees the old state plus the error.
            if now_saved {
                self.ids.remove(&event_id);
            } else {
                self.ids.insert(event_id);
            }
            return Err(e);
        }

        Ok(now_saved)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Sorted for a stable file, the in-memory set is unordered.
        let mut ids: Vec<i64> = self.ids.iter().copied().collect();
        ids.sort_unstable();

        let contents = serde_json::to_string(&ids)
            .map_err(|e| crate::error::Error::Serialization(e.to_string()))?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}
