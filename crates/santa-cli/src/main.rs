//! santa - Secret Santa rounds from the command line
//!
//! Reads a group file (participants, round status and pairing history) and
//! generates, validates or reports on assignments. Nothing is written back:
//! persisting the printed pairs is left to the caller.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

mod commands;
mod group;


/// santa - Secret Santa assignment engine
#[derive(Parser, Debug)]
#[command(name = "santa")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a round and print the assignment
    Generate {
        /// Group file (TOML or JSON)
        #[arg(short, long)]
        group: PathBuf,

        /// Round year
        #[arg(short, long)]
        year: i32,

        /// Engine configuration (TOML or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Random seed for a reproducible assignment
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check a hand-edited assignment
    Validate {
        /// Group file (TOML or JSON)
        #[arg(short, long)]
        group: PathBuf,

        /// Round year
        #[arg(short, long)]
        year: i32,

        /// Assignment file with `[[pairs]]` entries
        #[arg(short, long)]
        assignment: PathBuf,

        /// Engine configuration (TOML or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show who gave to whom in recent rounds
    History {
        /// Group file (TOML or JSON)
        #[arg(short, long)]
        group: PathBuf,

        /// Show rounds before this year
        #[arg(short, long)]
        year: i32,

        /// Number of rounds to show
        #[arg(short = 'n', long, default_value_t = 2)]
        rounds: usize,
    },

    /// Show whether the group is ready for its next round
    Status {
        /// Group file (TOML or JSON)
        #[arg(short, long)]
        group: PathBuf,

        /// Also check feasibility for this round year
        #[arg(short, long)]
        year: Option<i32>,

        /// Engine configuration (TOML or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Commands::Generate {
            group,
            year,
            config,
            seed,
            json,
        } => {
            let config = commands::load_config(config.as_deref(), seed)?;
            commands::generate(&group, year, &config, json)
        }
        Commands::Validate {
            group,
            year,
            assignment,
            config,
        } => {
            let config = commands::load_config(config.as_deref(), None)?;
            commands::validate(&group, year, &assignment, &config)
        }
        Commands::History {
            group,
            year,
            rounds,
        } => commands::history(&group, year, rounds),
        Commands::Status {
            group,
            year,
            config,
        } => {
            let config = commands::load_config(config.as_deref(), None)?;
            commands::status(&group, year, &config)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    santa::console::init_with_level(&cli.log_level);

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}
