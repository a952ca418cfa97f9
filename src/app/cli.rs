//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Numberline - graph inequalities on a number line and get graded
#[derive(Parser, Debug)]
#[command(name = "numberline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively, typing pointer events on stdin
    Play {
        /// RNG seed for a reproducible quiz sequence
        #[arg(short, long)]
        seed: Option<u64>,

        /// Record the interaction to a script file on exit
        #[arg(short, long)]
        record: Option<PathBuf>,
    },

    /// Replay a recorded event script against a fresh session
    Replay {
        /// Input script file
        #[arg(short, long)]
        input: PathBuf,

        /// RNG seed, so quizzes match the recorded session
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate and print sample quizzes
    Quiz {
        /// Number of quizzes to print
        #[arg(short = 'n', long, default_value = "5")]
        count: u32,

        /// RNG seed for a reproducible sequence
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "line.max", "quiz.seed")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "line.max", "line.track_width_px")
        key: String,

        /// Value to set
        value: String,
    },

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the scripts directory
    pub fn scripts_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".numberline").join("scripts"))
            .unwrap_or_else(|| PathBuf::from("scripts"))
    }
}
