pub mod board;
pub mod catalog;
pub mod config;
pub mod economy;
pub mod error;
pub mod game;
pub mod ingest;
pub mod session;
pub mod storage;

pub use board::{
    BingoCell, Board, BoardGenerator, BoardSnapshot, CellSnapshot, Grid, check_win, generate_board,
};
pub use catalog::{BingoMonster, CatalogProvider, CatalogTier, StaticCatalog};
pub use config::BingoConfig;
pub use economy::{
    CostTable, Economy, InMemoryPointStore, PointStore, Purchase, calculate_bingo_start_cost,
    calculate_carts_at_bingo_start,
};
pub use error::{Error, Result};
pub use game::{Difficulty, GauntletBoost, GauntletBoosts, WeaponTypeBonus};
pub use ingest::{SessionHandle, SessionService, TelemetryEvent};
pub use session::{
    BingoSession, ChannelNotifier, EndReason, Notification, Notifier, PurchaseOutcome,
    QuestOutcome, SessionSnapshot, SessionState, StartOutcome, TracingNotifier,
};
pub use storage::{FileLedger, HistoryRecorder, SessionRecord};
