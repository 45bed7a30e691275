//! Ability-score modifiers derived from stats.

use crate::evaluate::Modifier;
use crate::stats::Stat;

/// The ability modifier for a score: `floor((value - 10) / 2)`.
///
/// Rounds toward negative infinity, so a 9 gives -1 and a 3 gives -4.
pub fn derive_modifier(stat_value: i32) -> i32 {
    let delta = i64::from(stat_value) - 10;
    // Always fits: |delta / 2| <= 2^30 + 5.
    delta.div_euclid(2) as i32
}

/// The roll modifier a stat contributes when used, labelled `"<name> Modifier"`.
pub fn stat_modifier(stat: &Stat) -> Modifier {
    Modifier::new(
        format!("{} Modifier", stat.name),
        derive_modifier(stat.value),
    )
}
