//! Named character stats and their on-disk store.
//!
//! Stats are kept as a JSON array of `{"name": ..., "value": ...}` records.
//! A missing, unreadable, or malformed file loads as the default sheet
//! rather than an error: a broken file is treated like a first run.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RollerError, RollerResult};

/// File name used when no path is configured.
pub const DEFAULT_STATS_FILE: &str = "stats.json";

/// A named integer attribute of a character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stat {
    /// Stat name. May be empty.
    pub name: String,
    /// Stat score.
    pub value: i32,
}

impl Stat {
    /// Create a stat.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The sheet used on first run or when the stored one cannot be used.
pub fn default_stats() -> Vec<Stat> {
    vec![Stat::new("STR", 11), Stat::new("DEX", 12)]
}

/// Loads and saves the ordered stat list at a fixed path.
#[derive(Debug, Clone)]
pub struct StatStore {
    path: PathBuf,
}

impl Default for StatStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_FILE)
    }
}

impl StatStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the stats file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored stats.
    ///
    /// Returns `Ok(None)` when the file does not exist, `StorageRead` when it
    /// exists but cannot be read, and `StorageCorrupt` when it is not a list
    /// of stat records.
    pub fn try_load(&self) -> RollerResult<Option<Vec<Stat>>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(RollerError::StorageRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| RollerError::StorageCorrupt {
                path: self.path.clone(),
                source,
            })
    }

    /// Read the stored stats, falling back to [`default_stats`] on any problem.
    pub fn load(&self) -> Vec<Stat> {
        match self.try_load() {
            Ok(Some(stats)) => {
                tracing::debug!(path = %self.path.display(), count = stats.len(), "loaded stats");
                stats
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no stats file, using defaults");
                default_stats()
            }
            Err(e) => {
                tracing::warn!(error = %e, "stats file unusable, using defaults");
                default_stats()
            }
        }
    }

    /// Replace the stored stats with `stats`, in order.
    pub fn save(&self, stats: &[Stat]) -> RollerResult<()> {
        let json = serde_json::to_string_pretty(stats)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| RollerError::StorageWrite {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| RollerError::StorageWrite {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), count = stats.len(), "saved stats");
        Ok(())
    }
}
