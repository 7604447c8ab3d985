//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use toolish::core::models::DayId;
use toolish::output::OutputMode;

/// toolish - Workout tracker with personal records and completion history
#[derive(Parser, Debug)]
#[command(
    name = "toolish",
    version,
    about = "Workout tracker with personal records and completion history",
    long_about = "Track a multi-day workout program from the command line.\n\n\
                  Every saved session updates the best weight and reps of each exercise.\n\
                  A day counts as completed when every exercise has a completed set."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Data directory (overrides the configured one)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the default configuration and create the data directory
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// List the program's days and exercises
    Catalog {
        /// Only this day (e.g. `1` or `day1`)
        day: Option<DayId>,
    },

    /// Show personal records, last session and recent completions of a day
    Show {
        /// Day (e.g. `1` or `day1`)
        day: DayId,
    },

    /// Save a session for a day from JSON
    Save {
        /// Day (e.g. `1` or `day1`)
        day: DayId,

        /// JSON file with the session (`-` or omitted reads stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show the most recent completion dates of a day
    Dates {
        /// Day (e.g. `1` or `day1`)
        day: DayId,

        /// Number of dates to show (default from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export the workout history as JSON
    Export {
        /// Output file (`-` writes to stdout)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Untick every set of a day's last session and save it again
    ClearChecks {
        /// Day (e.g. `1` or `day1`)
        day: DayId,
    },

    /// Delete tracked data
    Reset {
        /// Only delete personal records
        #[arg(long)]
        records_only: bool,

        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let data_dir = cli.data_dir;

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, data_dir, output_mode),
        Some(Command::Catalog { day }) => commands::catalog(day, output_mode),
        Some(Command::Show { day }) => commands::show(day, data_dir, output_mode),
        Some(Command::Save { day, input }) => {
            commands::save(day, input.as_deref(), data_dir, output_mode)
        },
        Some(Command::Dates { day, limit }) => commands::dates(day, limit, data_dir, output_mode),
        Some(Command::Export { output }) => {
            commands::export(output.as_deref(), data_dir, output_mode)
        },
        Some(Command::ClearChecks { day }) => commands::clear_checks(day, data_dir, output_mode),
        Some(Command::Reset { records_only, yes }) => {
            commands::reset(records_only, yes, data_dir, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": toolish::VERSION
                    })
                );
            } else {
                println!("toolish v{}", toolish::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": toolish::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("toolish v{}", toolish::VERSION);
                println!("Use --help for usage");
            }
            Ok(())
        },
    }
}
