//! Command-line argument definitions for the `hilo` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "hilo",
    version,
    about = "Higher/Lower card wagering game",
    disable_help_subcommand = true
)]
pub struct HiloCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session on this terminal
    Play {
        /// RNG seed for the deck (default: from config, else random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run automated sessions and record them as JSONL
    Sim {
        /// Number of sessions to simulate
        #[arg(long, default_value_t = 1)]
        sessions: u32,
        /// Base RNG seed; session i uses seed + i
        #[arg(long)]
        seed: Option<u64>,
        /// Output JSONL path (default: <log_dir>/sim.jsonl)
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from a JSONL match record file
    Stats {
        /// Path to a .jsonl or .jsonl.zst record file
        #[arg(long)]
        input: String,
    },
    /// Deal one house/player pair and show the comparison
    Deal {
        /// RNG seed for the deck (default: random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display current configuration settings
    Cfg,
}
