use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::game::{Difficulty, GauntletBoost, GauntletBoosts};
use crate::ingest::TelemetryEvent;
use crate::session::{BingoSession, PurchaseOutcome, SessionSnapshot, StartOutcome};

enum Command {
    Event(TelemetryEvent),
    Start {
        difficulty: Difficulty,
        boosts: GauntletBoosts,
        extra_boost: bool,
        reply: Sender<Result<StartOutcome>>,
    },
    StartSelected(Sender<Result<StartOutcome>>),
    Stop(Sender<bool>),
    Reroll(Sender<PurchaseOutcome>),
    BuyCart(Sender<PurchaseOutcome>),
    SelectDifficulty(Difficulty, Sender<bool>),
    SetBoosts(GauntletBoosts, Sender<bool>),
    ToggleBoost(GauntletBoost, Sender<bool>),
    SetExtraBoost(bool, Sender<bool>),
    Snapshot(Sender<SessionSnapshot>),
    Shutdown,
}

/// Cloneable handle to the session service thread
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: Sender<Command>,
}

impl SessionHandle {
    fn send(&self, command: Command) -> Result<()> {
        self.tx.send(command).map_err(|_| Error::ServiceClosed)
    }

    fn request<T>(&self, make: impl FnOnce(Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.send(make(reply_tx))?;
        reply_rx.recv().map_err(|_| Error::ServiceClosed)
    }

    /// Queue a telemetry event. Does not wait for it to be applied.
    pub fn ingest(&self, event: TelemetryEvent) -> Result<()> {
        self.send(Command::Event(event))
    }

    pub fn quest_completed(&self, quest_id: u32) -> Result<()> {
        self.ingest(TelemetryEvent::QuestCompleted(quest_id))
    }

    pub fn run_recorded(&self, run_id: u32) -> Result<()> {
        self.ingest(TelemetryEvent::RunRecorded(run_id))
    }

    pub fn start(
        &self,
        difficulty: Difficulty,
        boosts: GauntletBoosts,
        extra_boost: bool,
    ) -> Result<StartOutcome> {
        self.request(|reply| Command::Start {
            difficulty,
            boosts,
            extra_boost,
            reply,
        })?
    }

    pub fn start_selected(&self) -> Result<StartOutcome> {
        self.request(Command::StartSelected)?
    }

    pub fn stop(&self) -> Result<bool> {
        self.request(Command::Stop)
    }

    pub fn reroll_weapon_bonuses(&self) -> Result<PurchaseOutcome> {
        self.request(Command::Reroll)
    }

    pub fn buy_cart(&self) -> Result<PurchaseOutcome> {
        self.request(Command::BuyCart)
    }

    pub fn select_difficulty(&self, difficulty: Difficulty) -> Result<bool> {
        self.request(|reply| Command::SelectDifficulty(difficulty, reply))
    }

    pub fn set_boosts(&self, boosts: GauntletBoosts) -> Result<bool> {
        self.request(|reply| Command::SetBoosts(boosts, reply))
    }

    pub fn toggle_boost(&self, boost: GauntletBoost) -> Result<bool> {
        self.request(|reply| Command::ToggleBoost(boost, reply))
    }

    pub fn set_extra_boost(&self, enabled: bool) -> Result<bool> {
        self.request(|reply| Command::SetExtraBoost(enabled, reply))
    }

    /// Current state. Also acts as a barrier: every command queued before
    /// it has been applied when it returns.
    pub fn snapshot(&self) -> Result<SessionSnapshot> {
        self.request(Command::Snapshot)
    }
}

/// Owns the session thread
pub struct SessionService {
    handle: SessionHandle,
    thread: JoinHandle<BingoSession>,
}

impl SessionService {
    pub fn spawn(session: BingoSession) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let thread = thread::Builder::new()
            .name("bingo-session".to_string())
            .spawn(move || run(session, rx))?;

        Ok(Self {
            handle: SessionHandle { tx },
            thread,
        })
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Stop the service after already-queued commands and hand back the session
    pub fn shutdown(self) -> Result<BingoSession> {
        // The thread may already have exited; join reports that below
        let _ = self.handle.send(Command::Shutdown);
        self.thread.join().map_err(|_| Error::ServiceClosed)
    }
}

fn run(mut session: BingoSession, rx: Receiver<Command>) -> BingoSession {
    debug!("Bingo session service started");

    for command in rx.iter() {
        match command {
            Command::Event(TelemetryEvent::QuestCompleted(id)) => {
                session.on_quest_completed(id);
            }
            Command::Event(TelemetryEvent::RunRecorded(id)) => {
                session.on_run_recorded(id);
            }
            Command::Start {
                difficulty,
                boosts,
                extra_boost,
                reply,
            } => {
                let _ = reply.send(session.start(difficulty, boosts, extra_boost));
            }
            Command::StartSelected(reply) => {
                let _ = reply.send(session.start_selected());
            }
            Command::Stop(reply) => {
                let _ = reply.send(session.stop());
            }
            Command::Reroll(reply) => {
                let _ = reply.send(session.reroll_weapon_bonuses());
            }
            Command::BuyCart(reply) => {
                let _ = reply.send(session.buy_cart());
            }
            Command::SelectDifficulty(difficulty, reply) => {
                let _ = reply.send(session.select_difficulty(difficulty));
            }
            Command::SetBoosts(boosts, reply) => {
                let _ = reply.send(session.set_boosts(boosts));
            }
            Command::ToggleBoost(boost, reply) => {
                let _ = reply.send(session.toggle_boost(boost));
            }
            Command::SetExtraBoost(enabled, reply) => {
                let _ = reply.send(session.set_extra_boost(enabled));
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(session.snapshot());
            }
            Command::Shutdown => break,
        }
    }

    if session.is_running() {
        info!("Bingo session service stopped with a session still running");
    }
    debug!("Bingo session service stopped");
    session
}

/// Forward events from a telemetry channel to the session until either side
/// closes
pub fn spawn_forwarder(
    events: Receiver<TelemetryEvent>,
    handle: SessionHandle,
) -> Result<JoinHandle<()>> {
    let thread = thread::Builder::new()
        .name("bingo-telemetry".to_string())
        .spawn(move || {
            for event in events.iter() {
                if handle.ingest(event).is_err() {
                    warn!("Session service closed, dropping telemetry");
                    break;
                }
            }
        })?;
    Ok(thread)
}
