//! Scripted session command.
//!
//! Drives a session service thread from a script file and prints every
//! notification the session emits.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use anyhow::{Context, Result};
use bingo_core::{
    BingoConfig, BingoSession, BoardGenerator, ChannelNotifier, Economy, FileLedger,
    HistoryRecorder, InMemoryPointStore, Notification, PointStore, PurchaseOutcome,
    SessionHandle, SessionService, StartOutcome,
};
use tracing::{debug, info};

use crate::cli_utils;
use crate::render;
use crate::script::{self, ScriptCommand};

pub struct PlayOptions<'a> {
    pub catalog: &'a Path,
    pub script: &'a Path,
    pub balance: Option<u64>,
    pub seed: Option<u64>,
    pub record_history: bool,
    pub json: bool,
}

pub fn run(config: &BingoConfig, options: PlayOptions<'_>) -> Result<()> {
    let catalog = cli_utils::load_catalog(options.catalog, config)?;
    let script_content = fs::read_to_string(options.script)
        .with_context(|| format!("failed to read script {}", options.script.display()))?;
    let commands = script::parse_script(&script_content)?;

    let store: Arc<dyn PointStore> = match options.balance {
        Some(balance) => Arc::new(InMemoryPointStore::new(balance)),
        None => {
            let ledger = FileLedger::open(&config.storage.ledger_path, 0)?;
            info!("Using ledger {:?}", ledger.path());
            Arc::new(ledger)
        }
    };

    let (tx, notifications) = mpsc::channel();
    let economy = Economy::new(Arc::clone(&store), config.cost_table());
    let mut session = BingoSession::new(Arc::new(catalog), economy)
        .with_generator(BoardGenerator::new(
            config.board.extreme_center_objective.clone(),
        ))
        .with_notifier(ChannelNotifier::new(tx));
    if let Some(seed) = options.seed {
        session = session.with_seed(seed);
    }
    if options.record_history {
        session = session.with_recorder(HistoryRecorder::new(&config.storage.history_dir));
    }

    let service = SessionService::spawn(session)?;
    let handle = service.handle();

    for command in &commands {
        debug!("Script: {:?}", command);
        execute(&handle, store.as_ref(), command)?;
        // Snapshot is a barrier: all notifications for this command are queued
        handle.snapshot()?;
        print_notifications(&notifications);
    }

    let snapshot = handle.snapshot()?;
    service.shutdown()?;
    print_notifications(&notifications);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", render::format_snapshot(&snapshot));
    }
    Ok(())
}

fn execute(handle: &SessionHandle, store: &dyn PointStore, command: &ScriptCommand) -> Result<()> {
    match command {
        ScriptCommand::Start(args) => {
            let outcome = match args {
                Some(a) => handle.start(a.difficulty, a.boosts, a.extra_boost)?,
                None => handle.start_selected()?,
            };
            if let StartOutcome::Started { cost } = outcome {
                println!("> start (paid {})", cost);
            } else {
                println!("> start: {:?}", outcome);
            }
        }
        ScriptCommand::Stop => {
            if !handle.stop()? {
                println!("> stop: no session running");
            }
        }
        ScriptCommand::Quest(id) => handle.quest_completed(*id)?,
        ScriptCommand::Run(id) => handle.run_recorded(*id)?,
        ScriptCommand::Reroll => print_purchase("reroll", handle.reroll_weapon_bonuses()?),
        ScriptCommand::Cart => print_purchase("cart", handle.buy_cart()?),
        ScriptCommand::Deposit(amount) => {
            store.deposit(*amount);
            println!("> deposit {} (balance {})", amount, store.balance());
        }
        ScriptCommand::Select(difficulty) => {
            if !handle.select_difficulty(*difficulty)? {
                println!("> select ignored while running");
            }
        }
        ScriptCommand::Boost(boost) => {
            if !handle.toggle_boost(*boost)? {
                println!("> boost ignored while running");
            }
        }
        ScriptCommand::Extra(enabled) => {
            if !handle.set_extra_boost(*enabled)? {
                println!("> extra ignored while running");
            }
        }
    }
    Ok(())
}

fn print_purchase(what: &str, outcome: PurchaseOutcome) {
    match outcome {
        PurchaseOutcome::Purchased { cost } => println!("> {} (paid {})", what, cost),
        PurchaseOutcome::NoSession => println!("> {}: no session running", what),
        PurchaseOutcome::InsufficientPoints { .. } => {}
    }
}

fn print_notifications(notifications: &Receiver<Notification>) {
    for notification in notifications.try_iter() {
        match notification {
            Notification::StateChanged(_) => {}
            other => println!("  {}", other.message()),
        }
    }
}
