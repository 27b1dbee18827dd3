//! Outbound notifications for a presentation layer.

use std::sync::mpsc::Sender;

use tracing::{debug, info, warn};

use crate::economy::Purchase;
use crate::game::Difficulty;
use crate::session::SessionSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
}

/// Something the UI may want to show. Never requires acknowledgement.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Emitted after every state transition or board mutation
    StateChanged(Box<SessionSnapshot>),
    SessionStarted { difficulty: Difficulty, cost: u64 },
    SessionCompleted { difficulty: Difficulty, runs: usize },
    SessionCancelled { difficulty: Difficulty },
    InsufficientPoints { purchase: Purchase, cost: u64, balance: u64 },
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Self::StateChanged(_) => Severity::Debug,
            Self::InsufficientPoints { .. } => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::StateChanged(snapshot) => format!(
                "State changed: running={}, balance={}",
                snapshot.running, snapshot.balance
            ),
            Self::SessionStarted { difficulty, cost } => {
                format!("Bingo started on {} for {} points", difficulty, cost)
            }
            Self::SessionCompleted { difficulty, runs } => {
                format!("Bingo! {} board completed after {} runs", difficulty, runs)
            }
            Self::SessionCancelled { difficulty } => format!("{} bingo cancelled", difficulty),
            Self::InsufficientPoints {
                purchase,
                cost,
                balance,
            } => format!(
                "Not enough bingo points for {}: need {}, have {}",
                purchase, cost, balance
            ),
        }
    }
}

/// Receives session notifications
pub trait Notifier: Send {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log at their severity
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity() {
            Severity::Debug => debug!("{}", notification.message()),
            Severity::Info => info!("{}", notification.message()),
            Severity::Warning => warn!("{}", notification.message()),
        }
    }
}

/// Forwards notifications to a channel, e.g. a UI thread
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<Notification>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<Notification>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // A closed receiver means nobody is listening any more
        if self.tx.send(notification).is_err() {
            debug!("Notification receiver dropped");
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}
