//! Dice pool definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RollerError, RollerResult};

/// A request to roll `count` identical dice with `faces` sides each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DicePool {
    /// Number of dice to roll.
    pub count: u32,
    /// Number of faces on each die.
    pub faces: u32,
}

impl DicePool {
    /// Create a pool. The values are not checked until [`validate`](Self::validate).
    pub fn new(count: u32, faces: u32) -> Self {
        Self { count, faces }
    }

    /// Reject pools with no dice or dice with no faces.
    pub fn validate(&self) -> RollerResult<()> {
        if self.count < 1 || self.faces < 1 {
            return Err(RollerError::InvalidArgument {
                count: self.count,
                faces: self.faces,
            });
        }
        Ok(())
    }
}

impl Default for DicePool {
    /// A single d20, the row a fresh session starts with.
    fn default() -> Self {
        Self::new(1, 20)
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.faces)
    }
}

impl FromStr for DicePool {
    type Err = RollerError;

    /// Parse `NdF` or `dF` (count defaults to 1). Nothing else is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RollerError::InvalidDiceNotation(s.to_string());
        let lower = s.trim().to_lowercase();
        let (count, faces) = lower.split_once('d').ok_or_else(invalid)?;

        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        let faces = faces.parse::<u32>().map_err(|_| invalid())?;

        let pool = Self::new(count, faces);
        pool.validate()?;
        Ok(pool)
    }
}
