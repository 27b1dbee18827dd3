//! Bingo session: the state machine, its snapshots and notifications.

mod controller;
mod notify;
mod state;

pub use controller::{BingoSession, SharedCatalog};
pub use notify::{ChannelNotifier, Notification, Notifier, NullNotifier, Severity, TracingNotifier};
pub use state::{
    EndReason, PurchaseOutcome, QuestOutcome, SessionSnapshot, SessionState, StartOutcome,
};
