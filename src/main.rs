use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "nutrilog")]
#[command(about = "Nutrition log streaks and achievements")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.nutrilog/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a config file with standard daily goals
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the current and best logging streak
    Streak {
        /// Event log JSON (defaults to the configured event log)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Evaluate as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },

    /// Check for newly unlocked achievements and record them
    Achievements {
        /// Event log JSON (defaults to the configured event log)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Show what would unlock without recording anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show daily totals against goals
    Summary {
        /// Event log JSON (defaults to the configured event log)
        #[arg(long)]
        log: Option<PathBuf>,

        /// Number of most recent days to show
        #[arg(long, default_value_t = 7)]
        days: usize,
    },

    /// List all achievements with progress
    Catalog {
        /// Event log JSON (defaults to the configured event log)
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(cli.config.clone(), force)?;
        }
        Commands::Streak { log, today } => {
            cli::streak::streak_command(config, log, today)?;
        }
        Commands::Achievements { log, dry_run } => {
            cli::achievements::achievements_command(config, log, dry_run)?;
        }
        Commands::Summary { log, days } => {
            cli::summary::summary_command(config, log, days)?;
        }
        Commands::Catalog { log } => {
            cli::catalog::catalog_command(config, log)?;
        }
    }

    Ok(())
}
