//! CLI frontend for the tabletop dice roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "roller",
    about = "Tabletop dice roller with a persistent stat sheet",
    version,
    propagate_version = true
)]
struct Cli {
    /// Stat sheet file
    #[arg(long, global = true, default_value = roller_core::stats::DEFAULT_STATS_FILE)]
    stats_file: PathBuf,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice pools with modifiers
    Roll {
        /// Dice pools such as 2d6 or d20 (default: 1d20)
        pools: Vec<String>,

        /// Modifier as LABEL=VALUE or VALUE (repeatable)
        #[arg(short = 'm', long = "mod", allow_hyphen_values = true)]
        modifiers: Vec<String>,

        /// Add a stat's ability modifier (repeatable)
        #[arg(short = 'u', long = "use")]
        use_stats: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect and edit the stat sheet
    Stats {
        #[command(subcommand)]
        action: StatsAction,
    },

    /// Start an interactive rolling session
    Shell {
        /// Only save the sheet when stats are added or removed
        #[arg(long)]
        no_save_on_edit: bool,
    },
}

#[derive(Subcommand)]
enum StatsAction {
    /// Show all stats with their modifiers
    List,

    /// Add a stat
    Add {
        /// Stat name
        name: String,

        /// Stat value
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Remove a stat by name
    Remove {
        /// Stat name (case-insensitive)
        name: String,
    },

    /// Change a stat's value
    Set {
        /// Stat name (case-insensitive)
        name: String,

        /// New value
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Show the ability modifier a stat grants
    Modifier {
        /// Stat name (case-insensitive)
        name: String,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let opts = commands::GlobalOpts {
        stats_file: cli.stats_file,
        seed: cli.seed,
    };

    let result = match cli.command {
        Commands::Roll {
            pools,
            modifiers,
            use_stats,
            json,
        } => commands::roll::run(&opts, &pools, &modifiers, &use_stats, json),
        Commands::Stats { action } => match action {
            StatsAction::List => commands::stats::list(&opts),
            StatsAction::Add { name, value } => commands::stats::add(&opts, &name, value),
            StatsAction::Remove { name } => commands::stats::remove(&opts, &name),
            StatsAction::Set { name, value } => commands::stats::set(&opts, &name, value),
            StatsAction::Modifier { name } => commands::stats::modifier(&opts, &name),
        },
        Commands::Shell { no_save_on_edit } => commands::shell::run(&opts, !no_save_on_edit),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
