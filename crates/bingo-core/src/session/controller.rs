//! Bingo session state machine.
//!
//! ## Transitions
//!
//! - Idle --start--> Running (start cost paid, fresh board)
//! - Running --start--> Idle (cancelled, no refund)
//! - Running --quest completes a line--> Idle (completed)
//! - Running --stop--> Idle (cancelled)
//! - Running --reroll / buy cart--> Running
//!
//! Every path back to Idle discards the board and run IDs and resets the
//! escalating costs.

use std::sync::Arc;

use chrono::{DateTime, Local};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::board::{self, Board, BoardGenerator, check_win, reroll_weapon_bonuses};
use crate::catalog::CatalogProvider;
use crate::economy::{Economy, Purchase, SpendResult};
use crate::error::Result;
use crate::game::{Difficulty, GauntletBoost, GauntletBoosts};
use crate::session::{
    EndReason, Notification, Notifier, PurchaseOutcome, QuestOutcome, SessionSnapshot,
    SessionState, StartOutcome, TracingNotifier,
};
use crate::storage::{HistoryRecorder, SessionRecord};

/// Shared catalog handle
pub type SharedCatalog = Arc<dyn CatalogProvider + Send + Sync>;

/// State that exists only while a session is running
struct ActiveRun {
    difficulty: Difficulty,
    boosts: GauntletBoosts,
    extra_boost: bool,
    board: Board,
    run_ids: Vec<u32>,
    carts: u32,
    start_cost: u64,
    started_at: DateTime<Local>,
}

/// Difficulty and modifiers chosen for the next start
#[derive(Debug, Clone, Copy, Default)]
struct Selection {
    difficulty: Difficulty,
    boosts: GauntletBoosts,
    extra_boost: bool,
}

/// The bingo session aggregate
pub struct BingoSession {
    catalog: SharedCatalog,
    generator: BoardGenerator,
    economy: Economy,
    notifier: Box<dyn Notifier>,
    recorder: Option<HistoryRecorder>,
    rng: StdRng,
    selection: Selection,
    run: Option<ActiveRun>,
}

impl BingoSession {
    pub fn new(catalog: SharedCatalog, economy: Economy) -> Self {
        Self {
            catalog,
            generator: BoardGenerator::default(),
            economy,
            notifier: Box::new(TracingNotifier),
            recorder: None,
            rng: StdRng::from_entropy(),
            selection: Selection::default(),
            run: None,
        }
    }

    #[must_use]
    pub fn with_generator(mut self, generator: BoardGenerator) -> Self {
        self.generator = generator;
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    #[must_use]
    pub fn with_recorder(mut self, recorder: HistoryRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn state(&self) -> SessionState {
        if self.run.is_some() {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn board(&self) -> Option<&Board> {
        self.run.as_ref().map(|r| &r.board)
    }

    pub fn run_ids(&self) -> &[u32] {
        self.run
            .as_ref()
            .map(|r| r.run_ids.as_slice())
            .unwrap_or_default()
    }

    pub fn carts(&self) -> u32 {
        self.run.as_ref().map_or(0, |r| r.carts)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.run
            .as_ref()
            .map_or(self.selection.difficulty, |r| r.difficulty)
    }

    pub fn boosts(&self) -> GauntletBoosts {
        self.run
            .as_ref()
            .map_or(self.selection.boosts, |r| r.boosts)
    }

    pub fn balance(&self) -> u64 {
        self.economy.balance()
    }

    /// Start cost for the current selection
    pub fn start_cost(&self) -> u64 {
        let s = self.selection;
        self.economy.start_cost(s.boosts, s.difficulty, s.extra_boost)
    }

    pub fn reroll_cost(&self) -> u64 {
        self.economy.reroll_cost()
    }

    pub fn carts_cost(&self) -> u64 {
        self.economy.carts_cost()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            running: self.is_running(),
            difficulty: self.difficulty(),
            boosts: self.boosts(),
            extra_boost: self
                .run
                .as_ref()
                .map_or(self.selection.extra_boost, |r| r.extra_boost),
            balance: self.balance(),
            start_cost: self.start_cost(),
            reroll_cost: self.reroll_cost(),
            carts_cost: self.carts_cost(),
            carts: self.carts(),
            run_ids: self.run_ids().to_vec(),
            board: self.board().map(board::snapshot),
        }
    }

    // Selection controls. All of them are rejected while running.

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        self.update_selection("difficulty", |s| s.difficulty = difficulty)
    }

    pub fn set_boosts(&mut self, boosts: GauntletBoosts) -> bool {
        self.update_selection("boosts", |s| s.boosts = boosts)
    }

    pub fn toggle_boost(&mut self, boost: GauntletBoost) -> bool {
        self.update_selection("boosts", |s| s.boosts = s.boosts.toggled(boost))
    }

    pub fn set_extra_boost(&mut self, enabled: bool) -> bool {
        self.update_selection("extra boost", |s| s.extra_boost = enabled)
    }

    fn update_selection(&mut self, what: &str, f: impl FnOnce(&mut Selection)) -> bool {
        if self.is_running() {
            info!("Ignoring {} change while a bingo session is running", what);
            return false;
        }
        f(&mut self.selection);
        self.notify_state_changed();
        true
    }

    /// Start with the current selection
    pub fn start_selected(&mut self) -> Result<StartOutcome> {
        let s = self.selection;
        self.start(s.difficulty, s.boosts, s.extra_boost)
    }

    /// Start a session, or cancel the running one.
    ///
    /// The board is generated before points are spent so a catalog fault
    /// never costs the player anything.
    pub fn start(
        &mut self,
        difficulty: Difficulty,
        boosts: GauntletBoosts,
        extra_boost: bool,
    ) -> Result<StartOutcome> {
        if self.is_running() {
            self.finish(EndReason::Cancelled);
            return Ok(StartOutcome::Cancelled);
        }

        let cost = self.economy.start_cost(boosts, difficulty, extra_boost);
        let board = self
            .generator
            .generate(difficulty, &*self.catalog, &mut self.rng)?;

        if let SpendResult::Declined { cost, balance } = self.economy.purchase(Purchase::Start, cost)
        {
            self.notifier.notify(Notification::InsufficientPoints {
                purchase: Purchase::Start,
                cost,
                balance,
            });
            return Ok(StartOutcome::InsufficientPoints { cost, balance });
        }

        self.selection = Selection {
            difficulty,
            boosts,
            extra_boost,
        };
        self.economy.reset_costs();
        self.run = Some(ActiveRun {
            difficulty,
            boosts,
            extra_boost,
            board,
            run_ids: Vec::new(),
            carts: self.economy.starting_carts(difficulty),
            start_cost: cost,
            started_at: Local::now(),
        });

        info!(
            "Bingo session started: difficulty={}, boosts={}, extra={}, cost={}",
            difficulty, boosts, extra_boost, cost
        );
        self.notifier
            .notify(Notification::SessionStarted { difficulty, cost });
        self.notify_state_changed();
        Ok(StartOutcome::Started { cost })
    }

    /// Cancel the running session. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            debug!("Stop requested with no running bingo session");
            return false;
        }
        self.finish(EndReason::Cancelled);
        true
    }

    /// Apply a quest completion to every matching cell, then check for a win
    pub fn on_quest_completed(&mut self, quest_id: u32) -> QuestOutcome {
        let Some(run) = self.run.as_mut() else {
            info!("Quest {} completed with no running bingo session, ignoring", quest_id);
            return QuestOutcome::Ignored;
        };

        let matched = board::apply_quest(&mut run.board, quest_id);
        debug!("Quest {} matched {} bingo cell(s)", quest_id, matched);

        if check_win(&run.board) {
            self.finish(EndReason::Completed);
            return QuestOutcome::Completed { matched };
        }

        if matched > 0 {
            self.notify_state_changed();
        }
        QuestOutcome::Applied { matched }
    }

    /// Record a run identifier for auditing
    pub fn on_run_recorded(&mut self, run_id: u32) -> bool {
        let Some(run) = self.run.as_mut() else {
            info!("Run {} recorded with no running bingo session, ignoring", run_id);
            return false;
        };
        run.run_ids.push(run_id);
        debug!("Recorded run {} ({} total)", run_id, run.run_ids.len());
        self.notify_state_changed();
        true
    }

    /// Pay the current reroll cost to redraw every cell's weapon bonus
    pub fn reroll_weapon_bonuses(&mut self) -> PurchaseOutcome {
        let outcome = self.purchase(Purchase::Reroll);
        if matches!(outcome, PurchaseOutcome::Purchased { .. }) {
            if let Some(run) = self.run.as_mut() {
                reroll_weapon_bonuses(&mut run.board, &mut self.rng);
            }
            self.notify_state_changed();
        }
        outcome
    }

    /// Pay the current cart cost for one more cart
    pub fn buy_cart(&mut self) -> PurchaseOutcome {
        let outcome = self.purchase(Purchase::Cart);
        if matches!(outcome, PurchaseOutcome::Purchased { .. }) {
            if let Some(run) = self.run.as_mut() {
                run.carts += 1;
            }
            self.notify_state_changed();
        }
        outcome
    }

    fn purchase(&mut self, purchase: Purchase) -> PurchaseOutcome {
        if !self.is_running() {
            info!("Cannot buy {} with no running bingo session", purchase);
            return PurchaseOutcome::NoSession;
        }

        match self.economy.purchase(purchase, 0) {
            SpendResult::Spent { cost } => PurchaseOutcome::Purchased { cost },
            SpendResult::Declined { cost, balance } => {
                self.notifier.notify(Notification::InsufficientPoints {
                    purchase,
                    cost,
                    balance,
                });
                PurchaseOutcome::InsufficientPoints { cost, balance }
            }
        }
    }

    /// Tear down the running session and return to idle
    fn finish(&mut self, reason: EndReason) {
        let Some(run) = self.run.take() else {
            debug_assert!(false, "finish called with no running session");
            return;
        };
        self.economy.reset_costs();

        info!(
            "Bingo session {:?}: difficulty={}, runs={}, completed cells={}",
            reason,
            run.difficulty,
            run.run_ids.len(),
            board::completed_count(&run.board)
        );

        if let Some(recorder) = &self.recorder {
            let record = SessionRecord {
                difficulty: run.difficulty,
                boosts: run.boosts,
                extra_boost: run.extra_boost,
                outcome: reason,
                started_at: run.started_at,
                ended_at: Local::now(),
                start_cost: run.start_cost,
                completed_cells: board::completed_count(&run.board),
                total_cells: run.board.width() * run.board.height(),
                run_ids: run.run_ids.clone(),
            };
            if let Err(e) = recorder.record(&record) {
                error!("Failed to record bingo history: {}", e);
            }
        }

        let notification = match reason {
            EndReason::Completed => Notification::SessionCompleted {
                difficulty: run.difficulty,
                runs: run.run_ids.len(),
            },
            EndReason::Cancelled => Notification::SessionCancelled {
                difficulty: run.difficulty,
            },
        };
        self.notifier.notify(notification);
        self.notify_state_changed();
    }

    fn notify_state_changed(&self) {
        self.notifier
            .notify(Notification::StateChanged(Box::new(self.snapshot())));
    }
}
