//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without running a session.

use std::path::PathBuf;

use bingo_core::Difficulty;
use clap::Parser;

// Re-create Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "bingo")]
struct Args {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Board {
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    Play {
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        #[arg(long, value_name = "FILE")]
        script: PathBuf,
        #[arg(long)]
        balance: Option<u64>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        no_history: bool,
        #[arg(long)]
        json: bool,
    },
    Validate {
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
    },
}

#[test]
fn test_subcommand_required() {
    assert!(Args::try_parse_from(["bingo"]).is_err());
}

#[test]
fn test_parse_board_defaults() {
    let args = Args::try_parse_from(["bingo", "board", "--catalog", "catalog.json"]).unwrap();
    match args.command {
        Command::Board {
            catalog,
            difficulty,
            seed,
            json,
        } => {
            assert_eq!(catalog, PathBuf::from("catalog.json"));
            assert_eq!(difficulty, Difficulty::Easy);
            assert!(seed.is_none());
            assert!(!json);
        }
        _ => panic!("Expected Board command"),
    }
}

#[test]
fn test_parse_board_extreme_with_seed() {
    let args = Args::try_parse_from([
        "bingo", "board", "--catalog", "c.json", "-d", "EXTREME", "--seed", "42",
    ])
    .unwrap();
    match args.command {
        Command::Board {
            difficulty, seed, ..
        } => {
            assert_eq!(difficulty, Difficulty::Extreme);
            assert_eq!(seed, Some(42));
        }
        _ => panic!("Expected Board command"),
    }
}

#[test]
fn test_parse_board_invalid_difficulty() {
    let result = Args::try_parse_from(["bingo", "board", "--catalog", "c.json", "-d", "ultra"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_play() {
    let args = Args::try_parse_from([
        "bingo",
        "--config",
        "bingo.toml",
        "play",
        "--catalog",
        "c.json",
        "--script",
        "s.txt",
        "--balance",
        "100",
        "--no-history",
    ])
    .unwrap();
    assert_eq!(args.config, Some(PathBuf::from("bingo.toml")));
    match args.command {
        Command::Play {
            script,
            balance,
            no_history,
            json,
            ..
        } => {
            assert_eq!(script, PathBuf::from("s.txt"));
            assert_eq!(balance, Some(100));
            assert!(no_history);
            assert!(!json);
        }
        _ => panic!("Expected Play command"),
    }
}

#[test]
fn test_parse_play_requires_script() {
    let result = Args::try_parse_from(["bingo", "play", "--catalog", "c.json"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_validate() {
    let args = Args::try_parse_from(["bingo", "validate", "--catalog", "c.json"]).unwrap();
    assert!(matches!(args.command, Command::Validate { .. }));
}
