pub mod roll;
pub mod shell;
pub mod stats;

use std::path::PathBuf;

use colored::Colorize;

use roller_core::{RollComponent, RollResult, RollerConfig, RollerSession};

/// Options shared by every subcommand.
pub struct GlobalOpts {
    pub stats_file: PathBuf,
    pub seed: Option<u64>,
}

impl GlobalOpts {
    /// Session configuration for these options.
    pub fn config(&self) -> RollerConfig {
        let config = RollerConfig::default().with_stats_path(self.stats_file.clone());
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Open a session with these options.
    pub fn open(&self) -> RollerSession {
        RollerSession::open(self.config())
    }
}

/// Parse a `LABEL=VALUE` or bare `VALUE` modifier argument.
pub fn parse_modifier(arg: &str) -> Result<(String, i32), String> {
    let (label, value) = match arg.rsplit_once('=') {
        Some((label, value)) => (label.trim(), value.trim()),
        None => ("", arg.trim()),
    };
    let value = value
        .parse::<i32>()
        .map_err(|_| format!("invalid modifier '{arg}': expected LABEL=VALUE or VALUE"))?;
    Ok((label.to_string(), value))
}

/// Render a roll as a coloured log block.
pub fn render_roll(result: &RollResult) -> String {
    let mut lines = Vec::with_capacity(result.components.len() + 1);
    for component in &result.components {
        match component {
            RollComponent::Dice(d) => lines.push(format!("  {}", d.to_string().cyan())),
            RollComponent::Modifier(m) => {
                let value = format!("{:+}", m.value);
                let value = if m.value >= 0 {
                    value.green()
                } else {
                    value.red()
                };
                lines.push(format!("  • {}: {value}", m.display_label()));
            }
        }
    }
    lines.push(format!(
        "  {}",
        format!("RESULT: {}", result.total).yellow().bold()
    ));
    lines.join("\n")
}
