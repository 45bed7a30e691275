//! Dice evaluation and stat persistence for tabletop play.
//!
//! Rolls dice pools with flat modifiers into a fully audited total,
//! derives ability modifiers from stats, and keeps a character's named
//! stats on disk between sessions. [`RollerSession`] bundles these into
//! the application state a frontend drives.

pub mod config;
pub mod dice;
pub mod error;
pub mod evaluate;
pub mod log;
pub mod modifier;
pub mod session;
pub mod stats;

pub use config::RollerConfig;
pub use dice::{DicePool, DiceRollOutcome, DieSource, ScriptedDice, roll_dice_pool};
pub use error::{RollerError, RollerResult};
pub use evaluate::{Modifier, ModifierOutcome, RollComponent, RollResult, evaluate_roll};
pub use log::{LogEntry, RollLog};
pub use modifier::{derive_modifier, stat_modifier};
pub use session::RollerSession;
pub use stats::{Stat, StatStore, default_stats};
