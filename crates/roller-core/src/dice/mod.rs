//! Dice pools, die sources, and single-pool rolling.
//!
//! A pool is `count` identical dice with `faces` sides each. Rolling draws
//! from a [`DieSource`]: the thread-local RNG by default, a seeded
//! [`StdRng`] for reproducible runs, or [`ScriptedDice`] to replay known
//! outcomes.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DiceRollOutcome, roll_dice_pool};

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Anything that can produce a single die result.
pub trait DieSource {
    /// Roll one die with `faces` sides. The result lies in `[1, faces]`.
    ///
    /// Callers guarantee `faces >= 1`.
    fn roll_die(&mut self, faces: u32) -> u32;
}

impl DieSource for ThreadRng {
    fn roll_die(&mut self, faces: u32) -> u32 {
        self.random_range(1..=faces)
    }
}

impl DieSource for StdRng {
    fn roll_die(&mut self, faces: u32) -> u32 {
        self.random_range(1..=faces)
    }
}

/// A die source that returns a fixed sequence of outcomes.
///
/// Values are handed out in order and the sequence restarts once exhausted.
/// Each value is clamped into `[1, faces]` so results stay valid for any die.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<u32>,
}

impl ScriptedDice {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self, faces: u32) -> u32 {
        let Some(value) = self.values.pop_front() else {
            return 1;
        };
        self.values.push_back(value);
        value.clamp(1, faces.max(1))
    }
}
