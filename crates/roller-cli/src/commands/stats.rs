//! Stat sheet subcommands.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use roller_core::{RollerSession, derive_modifier, stat_modifier};

use super::GlobalOpts;

fn find(session: &RollerSession, name: &str) -> Result<usize, String> {
    session.find_stat(name).map_err(|e| e.to_string())
}

pub fn list(opts: &GlobalOpts) -> Result<(), String> {
    let session = opts.open();
    let stats = session.stats();

    if stats.is_empty() {
        println!("  No stats.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Value", "Modifier"]);

    for stat in stats {
        let name = if stat.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            stat.name.clone()
        };
        table.add_row(vec![
            name,
            stat.value.to_string(),
            format!("{:+}", derive_modifier(stat.value)),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} stats in {}", stats.len(), opts.stats_file.display());

    Ok(())
}

pub fn add(opts: &GlobalOpts, name: &str, value: i32) -> Result<(), String> {
    let mut session = opts.open();
    let index = session.add_stat(name, value).map_err(|e| e.to_string())?;
    let stat = &session.stats()[index];
    println!("  {} {} ({})", "Added".green().bold(), stat.name, stat.value);
    Ok(())
}

pub fn remove(opts: &GlobalOpts, name: &str) -> Result<(), String> {
    let mut session = opts.open();
    let index = find(&session, name)?;
    let removed = session.remove_stat(index).map_err(|e| e.to_string())?;
    println!("  {} {}", "Removed".red().bold(), removed.name);
    Ok(())
}

pub fn set(opts: &GlobalOpts, name: &str, value: i32) -> Result<(), String> {
    let mut session = opts.open();
    let index = find(&session, name)?;
    session
        .set_stat_value(index, value)
        .map_err(|e| e.to_string())?;
    let stat = &session.stats()[index];
    println!("  {} {} = {}", "Set".bold(), stat.name, stat.value);
    Ok(())
}

pub fn modifier(opts: &GlobalOpts, name: &str) -> Result<(), String> {
    let session = opts.open();
    let index = find(&session, name)?;
    let m = stat_modifier(&session.stats()[index]);
    println!("  {}: {:+}", m.label, m.value);
    Ok(())
}
