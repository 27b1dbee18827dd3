//! CLI argument definitions for bingo.

use std::path::PathBuf;

use bingo_core::Difficulty;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bingo")]
#[command(about = "Monster Hunter Frontier bingo session runner", version)]
pub struct Args {
    /// Path to config file (TOML)
    #[arg(short, long, value_name = "FILE", env = "BINGO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate and print a board
    Board {
        /// Monster catalog (JSON)
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// Board difficulty (easy, medium, hard, extreme)
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
        /// RNG seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a scripted session
    Play {
        /// Monster catalog (JSON)
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// Command script, one command per line
        #[arg(long, value_name = "FILE")]
        script: PathBuf,
        /// Use an in-memory balance instead of the ledger file
        #[arg(long)]
        balance: Option<u64>,
        /// RNG seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,
        /// Do not write session history
        #[arg(long)]
        no_history: bool,
        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a catalog for configuration errors
    Validate {
        /// Monster catalog (JSON)
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
    },
}
