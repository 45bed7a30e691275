//! Rolling a single dice pool.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DicePool, DieSource};
use crate::error::RollerResult;

/// The outcome of rolling one dice pool, with every individual die kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollOutcome {
    /// Number of dice rolled.
    pub count: u32,
    /// Faces on each die.
    pub faces: u32,
    /// Each die result, in the order rolled.
    pub individual_results: Vec<u32>,
    /// Sum of `individual_results`.
    pub subtotal: u64,
}

impl DiceRollOutcome {
    /// Build an outcome from already-known die results.
    pub fn from_results(count: u32, faces: u32, individual_results: Vec<u32>) -> Self {
        let subtotal = individual_results.iter().map(|&v| u64::from(v)).sum();
        Self {
            count,
            faces,
            individual_results,
            subtotal,
        }
    }

    /// The pool this outcome was rolled from.
    pub fn pool(&self) -> DicePool {
        DicePool::new(self.count, self.faces)
    }
}

impl fmt::Display for DiceRollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self
            .individual_results
            .iter()
            .map(|v| v.to_string())
            .collect();
        write!(
            f,
            "{}: [{}] = {}",
            self.pool(),
            values.join(", "),
            self.subtotal
        )
    }
}

/// Roll `count` dice with `faces` sides each.
///
/// Fails with `InvalidArgument` before drawing anything if either value is 0.
pub fn roll_dice_pool(
    source: &mut dyn DieSource,
    count: u32,
    faces: u32,
) -> RollerResult<DiceRollOutcome> {
    DicePool::new(count, faces).validate()?;
    let results = (0..count).map(|_| source.roll_die(faces)).collect();
    let outcome = DiceRollOutcome::from_results(count, faces, results);
    tracing::debug!(pool = %outcome.pool(), subtotal = outcome.subtotal, "rolled dice pool");
    Ok(outcome)
}
