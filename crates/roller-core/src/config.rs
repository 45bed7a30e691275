//! Configuration for a roller session.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::dice::DicePool;
use crate::error::{RollerError, RollerResult};
use crate::stats::DEFAULT_STATS_FILE;

/// Configuration for a roller session.
#[derive(Debug, Clone)]
pub struct RollerConfig {
    /// Where the stat sheet is stored.
    pub stats_path: PathBuf,
    /// RNG seed for reproducible rolls. `None` uses the thread-local RNG.
    pub seed: Option<u64>,
    /// Persist stat value edits and renames immediately, not only on add/remove.
    pub save_on_edit: bool,
    /// Most dice a single row may roll.
    pub max_dice: u32,
    /// Most faces a single die may have.
    pub max_faces: u32,
    value_range: RangeInclusive<i32>,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            stats_path: PathBuf::from(DEFAULT_STATS_FILE),
            seed: None,
            save_on_edit: true,
            max_dice: 99,
            max_faces: 100,
            value_range: -999..=999,
        }
    }
}

impl RollerConfig {
    /// Set the stats file location.
    pub fn with_stats_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stats_path = path.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Choose whether value edits are saved right away.
    pub fn with_save_on_edit(mut self, save_on_edit: bool) -> Self {
        self.save_on_edit = save_on_edit;
        self
    }

    /// Set the largest dice count and face count a row may use.
    pub fn with_pool_limits(mut self, max_dice: u32, max_faces: u32) -> Self {
        self.max_dice = max_dice;
        self.max_faces = max_faces;
        self
    }

    /// Set the accepted value range. An empty range is ignored.
    pub fn with_value_range(mut self, range: RangeInclusive<i32>) -> Self {
        if !range.is_empty() {
            self.value_range = range;
        }
        self
    }

    /// Allowed range for stat and modifier values entered through the session.
    pub fn value_range(&self) -> &RangeInclusive<i32> {
        &self.value_range
    }

    /// Clamp `value` into the configured range.
    pub fn clamp_value(&self, value: i32) -> i32 {
        let (lo, hi) = (*self.value_range.start(), *self.value_range.end());
        if lo > hi {
            return value;
        }
        value.clamp(lo, hi)
    }

    /// Reject pools that are invalid or exceed the configured limits.
    pub fn check_pool(&self, pool: &DicePool) -> RollerResult<()> {
        pool.validate()?;
        if pool.count > self.max_dice || pool.faces > self.max_faces {
            return Err(RollerError::PoolTooLarge {
                count: pool.count,
                faces: pool.faces,
                max_dice: self.max_dice,
                max_faces: self.max_faces,
            });
        }
        Ok(())
    }
}
