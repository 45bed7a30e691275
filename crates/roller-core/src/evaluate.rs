//! Roll evaluation: dice pools plus flat modifiers into one audited total.
//!
//! A [`RollResult`] keeps every die and every modifier that went into the
//! total, so the log line can be rendered again later without re-rolling.
//! Components are ordered dice first, then modifiers, each in input order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, DiceRollOutcome, DieSource, roll_dice_pool};
use crate::error::RollerResult;

/// Label shown for a modifier with an empty label.
pub const DEFAULT_MODIFIER_LABEL: &str = "Modifier";

/// A flat signed adjustment to a roll total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifier {
    /// Display label. May be empty.
    pub label: String,
    /// Amount added to the total.
    pub value: i32,
}

impl Modifier {
    /// Create a modifier.
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The label, or `"Modifier"` if none was given.
    pub fn display_label(&self) -> &str {
        display_label(&self.label)
    }
}

/// A modifier as it was applied to a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierOutcome {
    /// Label as entered. May be empty.
    pub label: String,
    /// Amount added to the total.
    pub value: i32,
}

impl ModifierOutcome {
    /// The label, or `"Modifier"` if none was given.
    pub fn display_label(&self) -> &str {
        display_label(&self.label)
    }
}

impl From<&Modifier> for ModifierOutcome {
    fn from(m: &Modifier) -> Self {
        Self {
            label: m.label.clone(),
            value: m.value,
        }
    }
}

impl fmt::Display for ModifierOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:+}", self.display_label(), self.value)
    }
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        DEFAULT_MODIFIER_LABEL
    } else {
        label
    }
}

/// One contribution to a roll total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollComponent {
    /// A rolled dice pool.
    Dice(DiceRollOutcome),
    /// A flat modifier.
    Modifier(ModifierOutcome),
}

impl RollComponent {
    /// This component's contribution to the total.
    pub fn contribution(&self) -> i64 {
        match self {
            Self::Dice(d) => i64::try_from(d.subtotal).unwrap_or(i64::MAX),
            Self::Modifier(m) => i64::from(m.value),
        }
    }
}

/// The full, replayable result of one roll.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// Sum of all dice subtotals and modifier values.
    pub total: i64,
    /// Dice outcomes followed by modifier outcomes.
    pub components: Vec<RollComponent>,
}

impl RollResult {
    /// Assemble a result from components, computing the total.
    pub fn from_components(components: Vec<RollComponent>) -> Self {
        let total = sum_components(&components);
        Self { total, components }
    }

    /// All dice outcomes, in roll order.
    pub fn dice(&self) -> impl Iterator<Item = &DiceRollOutcome> {
        self.components.iter().filter_map(|c| match c {
            RollComponent::Dice(d) => Some(d),
            RollComponent::Modifier(_) => None,
        })
    }

    /// All modifier outcomes, in input order.
    pub fn modifiers(&self) -> impl Iterator<Item = &ModifierOutcome> {
        self.components.iter().filter_map(|c| match c {
            RollComponent::Modifier(m) => Some(m),
            RollComponent::Dice(_) => None,
        })
    }

    /// Recompute the total from the recorded components.
    pub fn recomputed_total(&self) -> i64 {
        sum_components(&self.components)
    }

    /// Whether nothing was rolled and no modifier applied.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

fn sum_components(components: &[RollComponent]) -> i64 {
    components
        .iter()
        .fold(0i64, |acc, c| acc.saturating_add(c.contribution()))
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            match component {
                RollComponent::Dice(d) => writeln!(f, "{d}")?,
                RollComponent::Modifier(m) => writeln!(f, "• {m}")?,
            }
        }
        write!(f, "RESULT: {}", self.total)
    }
}

/// Roll every pool, then apply every modifier.
///
/// All pools are validated before any die is rolled, so an invalid pool
/// fails the whole call instead of producing a partial total.
pub fn evaluate_roll(
    source: &mut dyn DieSource,
    pools: &[DicePool],
    modifiers: &[Modifier],
) -> RollerResult<RollResult> {
    for pool in pools {
        pool.validate()?;
    }

    let mut components = Vec::with_capacity(pools.len() + modifiers.len());
    for pool in pools {
        let outcome = roll_dice_pool(source, pool.count, pool.faces)?;
        components.push(RollComponent::Dice(outcome));
    }
    components.extend(
        modifiers
            .iter()
            .map(|m| RollComponent::Modifier(ModifierOutcome::from(m))),
    );

    let result = RollResult::from_components(components);
    tracing::debug!(
        pools = pools.len(),
        modifiers = modifiers.len(),
        total = result.total,
        "evaluated roll"
    );
    Ok(result)
}
