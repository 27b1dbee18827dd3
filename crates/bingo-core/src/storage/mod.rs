mod history;
mod ledger;

pub use history::{HistoryRecorder, SessionRecord};
pub use ledger::FileLedger;
