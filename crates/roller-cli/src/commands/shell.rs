//! Interactive rolling session.
//!
//! Mirrors the roller window: a stat list, dice rows, modifier rows, a roll
//! button, and a log. Rows are addressed by their 1-based position as shown
//! by `stats`, `dice`, and `mods`; stats may also be addressed by name.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use roller_core::{DicePool, RollerSession, derive_modifier};

use super::{GlobalOpts, parse_modifier, render_roll};

const HELP: &str = "\
Commands:
  stats                          list stats
  stat add <name> <value>        add a stat (saves)
  stat rm <stat>                 remove a stat (saves)
  stat set <stat> <value>        change a stat's value
  stat rename <stat> <name>      rename a stat
  use <stat>                     add a stat's modifier to the roll
  dice                           list dice rows
  dice add <NdF>                 add a dice row
  dice set <n> <NdF>             change a dice row
  dice rm <n>                    remove a dice row
  mods                           list modifier rows
  mod add [label] <value>        add a modifier row (or <label>=<value>)
  mod rm <n>                     remove a modifier row
  roll                           roll everything
  log                            show this session's rolls
  clear                          clear the log
  quit                           leave";

pub fn run(opts: &GlobalOpts, save_on_edit: bool) -> Result<(), String> {
    let config = opts.config().with_save_on_edit(save_on_edit);
    let mut shell = Shell::new(RollerSession::open(config));

    println!("  {} dice roller", "Starting".bold());
    println!("  Stats: {}", opts.stats_file.display());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match shell.process(input) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Text(output)) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
            }
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

/// What the shell prints after a command.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Quit,
}

/// Line-oriented command processor over a session.
pub struct Shell {
    session: RollerSession,
}

impl Shell {
    pub fn new(session: RollerSession) -> Self {
        Self { session }
    }

    pub fn process(&mut self, input: &str) -> Result<Reply, String> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let Some((cmd, args)) = words.split_first() else {
            return Ok(Reply::Text(String::new()));
        };

        let text = match (cmd.to_lowercase().as_str(), args) {
            ("help" | "?", _) => HELP.to_string(),
            ("quit" | "q" | "exit", _) => return Ok(Reply::Quit),
            ("stats", []) => self.list_stats(),
            ("stat", [sub, rest @ ..]) => self.stat(sub, rest)?,
            ("use", [_, ..]) => self.use_stat(&args.join(" "))?,
            ("dice", []) => self.list_dice(),
            ("dice", [sub, rest @ ..]) => self.dice(sub, rest)?,
            ("mods", []) => self.list_mods(),
            ("mod", [sub, rest @ ..]) => self.modifier(sub, rest)?,
            ("roll" | "r", []) => {
                let result = self.session.roll().map_err(|e| e.to_string())?;
                render_roll(result)
            }
            ("log", []) => self.show_log(),
            ("clear", []) => {
                self.session.clear_log();
                "Log cleared.".to_string()
            }
            _ => return Err(format!("unknown command: {input} (try 'help')")),
        };
        Ok(Reply::Text(text))
    }

    fn stat(&mut self, sub: &str, rest: &[&str]) -> Result<String, String> {
        match (sub, rest) {
            ("add", [name @ .., value]) => {
                let value = parse_value(value)?;
                let index = self
                    .session
                    .add_stat(name.join(" "), value)
                    .map_err(|e| e.to_string())?;
                let stat = &self.session.stats()[index];
                Ok(format!("Added {} ({}).", stat.name, stat.value))
            }
            ("rm", [_, ..]) => {
                let index = self.stat_index(&rest.join(" "))?;
                let removed = self
                    .session
                    .remove_stat(index)
                    .map_err(|e| e.to_string())?;
                Ok(format!("Removed {}.", removed.name))
            }
            ("set", [target @ .., value]) if !target.is_empty() => {
                let value = parse_value(value)?;
                let index = self.stat_index(&target.join(" "))?;
                self.session
                    .set_stat_value(index, value)
                    .map_err(|e| e.to_string())?;
                let stat = &self.session.stats()[index];
                Ok(format!("{} = {}.", stat.name, stat.value))
            }
            ("rename", [target, name @ ..]) => {
                let index = self.stat_index(target)?;
                self.session
                    .rename_stat(index, name.join(" "))
                    .map_err(|e| e.to_string())?;
                Ok(format!("Renamed to {}.", self.session.stats()[index].name))
            }
            _ => Err("usage: stat add|rm|set|rename ...".to_string()),
        }
    }

    fn use_stat(&mut self, target: &str) -> Result<String, String> {
        let index = self.stat_index(target)?;
        let m = self.session.use_stat(index).map_err(|e| e.to_string())?;
        Ok(format!("Added {}: {:+}.", m.label, m.value))
    }

    fn dice(&mut self, sub: &str, rest: &[&str]) -> Result<String, String> {
        match (sub, rest) {
            ("add", [pool]) => {
                let pool = parse_pool(pool)?;
                self.session.add_pool(pool).map_err(|e| e.to_string())?;
                Ok(format!("Added {pool}."))
            }
            ("set", [n, pool]) => {
                let index = parse_position(n)?;
                let pool = parse_pool(pool)?;
                self.session
                    .set_pool(index, pool)
                    .map_err(|e| e.to_string())?;
                Ok(format!("Row {n} is now {pool}."))
            }
            ("rm", [n]) => {
                let index = parse_position(n)?;
                let removed = self
                    .session
                    .remove_pool(index)
                    .map_err(|e| e.to_string())?;
                Ok(format!("Removed {removed}."))
            }
            _ => Err("usage: dice add|set|rm ...".to_string()),
        }
    }

    fn modifier(&mut self, sub: &str, rest: &[&str]) -> Result<String, String> {
        match (sub, rest) {
            ("add", [label @ .., value]) => {
                let (label, value) = if rest.iter().any(|w| w.contains('=')) {
                    parse_modifier(&rest.join(" "))?
                } else {
                    (label.join(" "), parse_modifier(value)?.1)
                };
                let index = self.session.add_modifier(label, value);
                let m = &self.session.modifiers()[index];
                Ok(format!("Added {}: {:+}.", m.display_label(), m.value))
            }
            ("rm", [n]) => {
                let index = parse_position(n)?;
                let removed = self
                    .session
                    .remove_modifier(index)
                    .map_err(|e| e.to_string())?;
                Ok(format!("Removed {}.", removed.display_label()))
            }
            _ => Err("usage: mod add|rm ...".to_string()),
        }
    }

    /// Resolve a stat name, or failing that a 1-based position.
    fn stat_index(&self, target: &str) -> Result<usize, String> {
        match self.session.find_stat(target) {
            Ok(index) => Ok(index),
            Err(e) if target.parse::<usize>().is_err() => Err(e.to_string()),
            Err(_) => parse_position(target),
        }
    }

    fn list_stats(&self) -> String {
        let stats = self.session.stats();
        if stats.is_empty() {
            return "No stats.".to_string();
        }
        stats
            .iter()
            .enumerate()
            .map(|(i, s)| {
                format!(
                    "{}. {} {} ({:+})",
                    i + 1,
                    s.name,
                    s.value,
                    derive_modifier(s.value)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn list_dice(&self) -> String {
        let pools = self.session.pools();
        if pools.is_empty() {
            return "No dice.".to_string();
        }
        pools
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {p}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn list_mods(&self) -> String {
        let mods = self.session.modifiers();
        if mods.is_empty() {
            return "No modifiers.".to_string();
        }
        mods.iter()
            .enumerate()
            .map(|(i, m)| format!("{}. {}: {:+}", i + 1, m.display_label(), m.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn show_log(&self) -> String {
        let log = self.session.log();
        if log.is_empty() {
            return "Log is empty.".to_string();
        }
        log.entries()
            .iter()
            .map(|entry| {
                format!(
                    "[{}]\n{}",
                    entry.timestamp.format("%H:%M:%S"),
                    render_roll(&entry.result)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_value(s: &str) -> Result<i32, String> {
    s.parse::<i32>()
        .map_err(|_| format!("invalid value '{s}': expected an integer"))
}

fn parse_pool(s: &str) -> Result<DicePool, String> {
    s.parse::<DicePool>().map_err(|e| e.to_string())
}

/// Convert a 1-based row number to an index.
fn parse_position(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("invalid row '{s}': expected a number from 1")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roller_core::{RollerConfig, ScriptedDice, Stat, StatStore};
    use tempfile::TempDir;

    fn shell_in(dir: &TempDir, rolls: &[u32]) -> Shell {
        colored::control::set_override(false);
        let config = RollerConfig::default().with_stats_path(dir.path().join("stats.json"));
        Shell::new(RollerSession::with_dice(
            config,
            Box::new(ScriptedDice::new(rolls.to_vec())),
        ))
    }

    fn text(reply: Result<Reply, String>) -> String {
        match reply {
            Ok(Reply::Text(t)) => t,
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn lists_default_state() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[]);
        assert_eq!(text(shell.process("stats")), "1. STR 11 (+0)\n2. DEX 12 (+1)");
        assert_eq!(text(shell.process("dice")), "1. 1d20");
        assert_eq!(text(shell.process("mods")), "No modifiers.");
    }

    #[test]
    fn full_roll() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[4, 5]);
        text(shell.process("dice set 1 2d6"));
        text(shell.process("mod add Luck 3"));
        let out = text(shell.process("roll"));
        assert_eq!(out, "  2d6: [4, 5] = 9\n  • Luck: +3\n  RESULT: 12");
        assert!(text(shell.process("log")).contains("RESULT: 12"));
        text(shell.process("clear"));
        assert_eq!(text(shell.process("log")), "Log is empty.");
    }

    #[test]
    fn use_stat_by_name_and_position() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[]);
        assert_eq!(text(shell.process("use dex")), "Added DEX Modifier: +1.");
        text(shell.process("stat add WIS 9"));
        assert_eq!(text(shell.process("use 3")), "Added WIS Modifier: -1.");
        assert_eq!(
            text(shell.process("mods")),
            "1. DEX Modifier: +1\n2. WIS Modifier: -1"
        );
    }

    #[test]
    fn stat_edits_persist() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[]);
        text(shell.process("stat add Sanity -4"));
        text(shell.process("stat set str 15"));
        text(shell.process("stat rename 2 AGI"));
        text(shell.process("stat rm 1"));

        let stored = StatStore::new(dir.path().join("stats.json")).load();
        assert_eq!(stored, vec![Stat::new("AGI", 12), Stat::new("Sanity", -4)]);
    }

    #[test]
    fn unlabelled_modifier() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[]);
        assert_eq!(text(shell.process("mod add -2")), "Added Modifier: -2.");
        assert_eq!(text(shell.process("mod rm 1")), "Removed Modifier.");
    }

    #[test]
    fn labelled_modifier_with_equals() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[]);
        assert_eq!(text(shell.process("mod add Luck=3")), "Added Luck: +3.");
        assert_eq!(text(shell.process("mod add Bad Luck=-2")), "Added Bad Luck: -2.");
        assert_eq!(text(shell.process("mod add Cover = 1")), "Added Cover: +1.");
        assert!(shell.process("mod add Luck=x").is_err());
        assert_eq!(
            text(shell.process("mods")),
            "1. Luck: +3\n2. Bad Luck: -2\n3. Cover: +1"
        );
    }

    #[test]
    fn numeric_stat_names_resolve_by_name_first() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[]);
        text(shell.process("stat add 1 5"));
        assert_eq!(text(shell.process("stat set 1 7")), "1 = 7.");
        assert_eq!(shell.session.stats()[0], Stat::new("STR", 11));
        // Positions still work when no stat has that name.
        assert_eq!(text(shell.process("stat set 2 14")), "DEX = 14.");
    }

    #[test]
    fn errors_are_reported() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[]);
        assert!(shell.process("dice add 2d6+1").is_err());
        assert!(shell.process("dice add 0d6").is_err());
        assert!(shell.process("dice rm 0").is_err());
        assert!(shell.process("dice rm 7").is_err());
        assert!(shell.process("use CHA").is_err());
        assert!(shell.process("stat add STR high").is_err());
        assert!(shell.process("frobnicate").is_err());
    }

    #[test]
    fn quit() {
        let dir = TempDir::new().unwrap();
        let mut shell = shell_in(&dir, &[]);
        assert_eq!(shell.process("quit"), Ok(Reply::Quit));
        assert_eq!(shell.process("Q"), Ok(Reply::Quit));
    }
}
