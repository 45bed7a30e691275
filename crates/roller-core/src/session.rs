//! Roller session: the application state behind a UI.
//!
//! `RollerSession` owns the stat sheet, the configured dice rows and
//! modifier rows, and the roll log as plain data. A frontend reads and
//! writes only through these methods and renders what they return.
//! Adding or removing a stat always saves the sheet. Value edits and
//! renames save too unless `save_on_edit` is off.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::RollerConfig;
use crate::dice::{DicePool, DieSource};
use crate::error::{RollerError, RollerResult};
use crate::evaluate::{Modifier, RollResult, evaluate_roll};
use crate::log::RollLog;
use crate::modifier::stat_modifier;
use crate::stats::{Stat, StatStore};

/// An interactive roller session.
pub struct RollerSession {
    config: RollerConfig,
    store: StatStore,
    stats: Vec<Stat>,
    pools: Vec<DicePool>,
    modifiers: Vec<Modifier>,
    log: RollLog,
    dice: Box<dyn DieSource>,
}

impl RollerSession {
    /// Open a session: load the stat sheet and start with one 1d20 row.
    pub fn open(config: RollerConfig) -> Self {
        let dice: Box<dyn DieSource> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };
        Self::with_dice(config, dice)
    }

    /// Open a session that rolls with the given die source.
    pub fn with_dice(config: RollerConfig, dice: Box<dyn DieSource>) -> Self {
        let store = StatStore::new(config.stats_path.clone());
        let stats = store.load();
        Self {
            config,
            store,
            stats,
            pools: vec![DicePool::default()],
            modifiers: Vec::new(),
            log: RollLog::new(),
            dice,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &RollerConfig {
        &self.config
    }

    /// Get the stat store.
    pub fn store(&self) -> &StatStore {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Stats
    // -----------------------------------------------------------------------

    /// The stat sheet, in display order.
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    /// Position of the first stat whose name matches, ignoring case.
    pub fn find_stat(&self, name: &str) -> RollerResult<usize> {
        self.stats
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RollerError::UnknownStat(name.to_string()))
    }

    /// Append a stat and save the sheet. Returns its position.
    ///
    /// The stat is kept even if saving fails.
    pub fn add_stat(&mut self, name: impl Into<String>, value: i32) -> RollerResult<usize> {
        let value = self.config.clamp_value(value);
        self.stats.push(Stat::new(name, value));
        self.save_stats()?;
        Ok(self.stats.len() - 1)
    }

    /// Remove the stat at `index` and save the sheet.
    ///
    /// The removal stands even if saving fails.
    pub fn remove_stat(&mut self, index: usize) -> RollerResult<Stat> {
        check_index("stat", index, self.stats.len())?;
        let removed = self.stats.remove(index);
        self.save_stats()?;
        Ok(removed)
    }

    /// Change the value of the stat at `index`.
    pub fn set_stat_value(&mut self, index: usize, value: i32) -> RollerResult<()> {
        check_index("stat", index, self.stats.len())?;
        self.stats[index].value = self.config.clamp_value(value);
        self.save_after_edit()
    }

    /// Rename the stat at `index`.
    pub fn rename_stat(&mut self, index: usize, name: impl Into<String>) -> RollerResult<()> {
        check_index("stat", index, self.stats.len())?;
        self.stats[index].name = name.into();
        self.save_after_edit()
    }

    /// Write the current sheet to the store.
    pub fn save_stats(&self) -> RollerResult<()> {
        self.store.save(&self.stats)
    }

    fn save_after_edit(&self) -> RollerResult<()> {
        if self.config.save_on_edit {
            self.save_stats()
        } else {
            Ok(())
        }
    }

    // -----------------------------------------------------------------------
    // Dice rows
    // -----------------------------------------------------------------------

    /// The configured dice rows.
    pub fn pools(&self) -> &[DicePool] {
        &self.pools
    }

    /// Add a dice row. Returns its position.
    pub fn add_pool(&mut self, pool: DicePool) -> RollerResult<usize> {
        self.config.check_pool(&pool)?;
        self.pools.push(pool);
        Ok(self.pools.len() - 1)
    }

    /// Remove the dice row at `index`.
    pub fn remove_pool(&mut self, index: usize) -> RollerResult<DicePool> {
        check_index("dice row", index, self.pools.len())?;
        Ok(self.pools.remove(index))
    }

    /// Replace the dice row at `index`.
    pub fn set_pool(&mut self, index: usize, pool: DicePool) -> RollerResult<()> {
        check_index("dice row", index, self.pools.len())?;
        self.config.check_pool(&pool)?;
        self.pools[index] = pool;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Modifier rows
    // -----------------------------------------------------------------------

    /// The configured modifier rows.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Add a modifier row. Returns its position.
    pub fn add_modifier(&mut self, label: impl Into<String>, value: i32) -> usize {
        let value = self.config.clamp_value(value);
        self.modifiers.push(Modifier::new(label, value));
        self.modifiers.len() - 1
    }

    /// Remove the modifier row at `index`.
    pub fn remove_modifier(&mut self, index: usize) -> RollerResult<Modifier> {
        check_index("modifier", index, self.modifiers.len())?;
        Ok(self.modifiers.remove(index))
    }

    /// Add the ability modifier of the stat at `index` as a modifier row.
    pub fn use_stat(&mut self, index: usize) -> RollerResult<&Modifier> {
        check_index("stat", index, self.stats.len())?;
        let modifier = stat_modifier(&self.stats[index]);
        let index = self.add_modifier(modifier.label, modifier.value);
        Ok(&self.modifiers[index])
    }

    // -----------------------------------------------------------------------
    // Rolling
    // -----------------------------------------------------------------------

    /// Roll every dice row, apply every modifier row, and log the result.
    pub fn roll(&mut self) -> RollerResult<&RollResult> {
        for pool in &self.pools {
            self.config.check_pool(pool)?;
        }
        let result = evaluate_roll(&mut *self.dice, &self.pools, &self.modifiers)?;
        tracing::info!(total = result.total, "roll");
        Ok(&self.log.append(result).result)
    }

    /// The roll log.
    pub fn log(&self) -> &RollLog {
        &self.log
    }

    /// Empty the roll log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

fn check_index(kind: &'static str, index: usize, len: usize) -> RollerResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(RollerError::IndexOutOfRange { kind, index, len })
    }
}
