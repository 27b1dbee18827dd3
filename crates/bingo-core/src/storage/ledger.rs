use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::economy::PointStore;
use crate::error::Result;

#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    balance: u64,
}

/// Point balance persisted to a JSON file after every change
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    balance: Mutex<u64>,
}

impl FileLedger {
    /// Open the ledger at `path`, starting from `initial` if it does not exist
    pub fn open<P: AsRef<Path>>(path: P, initial: u64) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let exists = path.exists();
        let balance = if exists {
            let content = fs::read_to_string(&path)?;
            let file: LedgerFile = serde_json::from_str(&content)?;
            debug!("Loaded ledger {:?}: balance={}", path, file.balance);
            file.balance
        } else {
            initial
        };

        let ledger = Self {
            path,
            balance: Mutex::new(balance),
        };
        if !exists {
            ledger.persist(balance)?;
        }
        Ok(ledger)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        self.balance.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, balance: u64) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&LedgerFile { balance })?)?;
        Ok(())
    }

    fn persist_logged(&self, balance: u64) {
        if let Err(e) = self.persist(balance) {
            error!("Failed to persist ledger {:?}: {}", self.path, e);
        }
    }
}

impl PointStore for FileLedger {
    fn balance(&self) -> u64 {
        *self.lock()
    }

    /// A spend only succeeds once the new balance is on disk
    fn try_spend(&self, amount: u64) -> bool {
        let mut balance = self.lock();
        if *balance < amount {
            return false;
        }
        let remaining = *balance - amount;
        if let Err(e) = self.persist(remaining) {
            error!("Failed to persist ledger {:?}, spend declined: {}", self.path, e);
            return false;
        }
        *balance = remaining;
        true
    }

    /// Deposits are kept in memory even if the write fails; the next
    /// successful write catches the file up.
    fn deposit(&self, amount: u64) {
        let mut balance = self.lock();
        *balance = balance.saturating_add(amount);
        self.persist_logged(*balance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_with_initial_balance() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("points.json");

        let ledger = FileLedger::open(&path, 25).unwrap();
        assert_eq!(ledger.balance(), 25);
        assert!(path.exists());
    }

    #[test]
    fn test_balance_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("points.json");

        {
            let ledger = FileLedger::open(&path, 25).unwrap();
            assert!(ledger.try_spend(10));
            ledger.deposit(3);
        }

        // Initial value is ignored once the file exists
        let ledger = FileLedger::open(&path, 999).unwrap();
        assert_eq!(ledger.balance(), 18);
    }

    #[test]
    fn test_declined_spend_is_not_persisted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("points.json");

        let ledger = FileLedger::open(&path, 5).unwrap();
        assert!(!ledger.try_spend(6));
        drop(ledger);

        assert_eq!(FileLedger::open(&path, 0).unwrap().balance(), 5);
    }

    #[test]
    fn test_spend_declined_when_write_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("points.json");

        let ledger = FileLedger::open(&path, 20).unwrap();
        // A directory at the ledger path makes every write fail
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(!ledger.try_spend(5));
        assert_eq!(ledger.balance(), 20);
    }

    #[test]
    fn test_corrupt_ledger_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("points.json");
        fs::write(&path, "not json").unwrap();

        assert!(FileLedger::open(&path, 0).is_err());
    }
}
