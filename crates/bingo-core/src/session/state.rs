use serde::{Deserialize, Serialize};

use crate::board::BoardSnapshot;
use crate::game::{Difficulty, GauntletBoosts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
}

/// Why a running session went back to idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndReason {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started { cost: u64 },
    /// A second start while running cancels the session
    Cancelled,
    InsufficientPoints { cost: u64, balance: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { cost: u64 },
    InsufficientPoints { cost: u64, balance: u64 },
    NoSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestOutcome {
    /// No session was running
    Ignored,
    Applied { matched: usize },
    Completed { matched: usize },
}

/// Everything a UI needs to render the session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub running: bool,
    pub difficulty: Difficulty,
    pub boosts: GauntletBoosts,
    pub extra_boost: bool,
    pub balance: u64,
    pub start_cost: u64,
    pub reroll_cost: u64,
    pub carts_cost: u64,
    pub carts: u32,
    pub run_ids: Vec<u32>,
    pub board: Option<BoardSnapshot>,
}

impl SessionSnapshot {
    pub fn state(&self) -> SessionState {
        if self.running {
            SessionState::Running
        } else {
            SessionState::Idle
        }
    }
}
