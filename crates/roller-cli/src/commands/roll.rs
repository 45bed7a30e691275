//! One-shot roll.

use roller_core::DicePool;

use super::{GlobalOpts, parse_modifier, render_roll};

pub fn run(
    opts: &GlobalOpts,
    pools: &[String],
    modifiers: &[String],
    use_stats: &[String],
    json: bool,
) -> Result<(), String> {
    let mut session = opts.open();

    if !pools.is_empty() {
        session.remove_pool(0).map_err(|e| e.to_string())?;
        for pool in pools {
            let pool = pool.parse::<DicePool>().map_err(|e| e.to_string())?;
            session.add_pool(pool).map_err(|e| e.to_string())?;
        }
    }

    for name in use_stats {
        let index = session.find_stat(name).map_err(|e| e.to_string())?;
        session.use_stat(index).map_err(|e| e.to_string())?;
    }

    for arg in modifiers {
        let (label, value) = parse_modifier(arg)?;
        session.add_modifier(label, value);
    }

    let result = session.roll().map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(result)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
    } else {
        println!("{}", render_roll(result));
    }

    Ok(())
}
