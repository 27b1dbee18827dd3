mod cli;
mod cli_utils;
mod commands;
mod render;
mod script;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bingo=info,bingo_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = cli_utils::load_config(args.config.as_deref());

    match args.command {
        Command::Board {
            catalog,
            difficulty,
            seed,
            json,
        } => commands::board::run(&config, &catalog, difficulty, seed, json),
        Command::Play {
            catalog,
            script,
            balance,
            seed,
            no_history,
            json,
        } => commands::play::run(
            &config,
            commands::play::PlayOptions {
                catalog: &catalog,
                script: &script,
                balance,
                seed,
                record_history: !no_history,
                json,
            },
        ),
        Command::Validate { catalog } => commands::validate::run(&config, &catalog),
    }
}
