use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::{Difficulty, GauntletBoosts};
use crate::session::EndReason;

/// One finished bingo session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub difficulty: Difficulty,
    pub boosts: GauntletBoosts,
    pub extra_boost: bool,
    pub outcome: EndReason,
    pub started_at: DateTime<Local>,
    pub ended_at: DateTime<Local>,
    pub start_cost: u64,
    pub completed_cells: usize,
    pub total_cells: usize,
    pub run_ids: Vec<u32>,
}

/// Appends finished sessions to one JSON array file per day
pub struct HistoryRecorder {
    base_dir: PathBuf,
}

impl HistoryRecorder {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// History file for the day `record` ended on
    pub fn path_for(&self, record: &SessionRecord) -> PathBuf {
        self.base_dir.join(format!(
            "Bingo_{}.json",
            record.ended_at.format("%Y_%m_%d")
        ))
    }

    pub fn record(&self, record: &SessionRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.path_for(record);

        let mut entries = if path.exists() {
            Self::load(&path)?
        } else {
            Vec::new()
        };
        entries.push(record.clone());
        fs::write(&path, serde_json::to_string_pretty(&entries)?)?;

        Ok(path)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<SessionRecord>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(outcome: EndReason) -> SessionRecord {
        let now = Local::now();
        SessionRecord {
            difficulty: Difficulty::Medium,
            boosts: GauntletBoosts::NONE,
            extra_boost: false,
            outcome,
            started_at: now,
            ended_at: now,
            start_cost: 20,
            completed_cells: 5,
            total_cells: 25,
            run_ids: vec![11, 12],
        }
    }

    #[test]
    fn test_record_creates_file() {
        let temp = TempDir::new().unwrap();
        let recorder = HistoryRecorder::new(temp.path().join("history"));

        let path = recorder.record(&record(EndReason::Completed)).unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "json");

        let entries = HistoryRecorder::load(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].outcome, EndReason::Completed);
        assert_eq!(entries[0].run_ids, vec![11, 12]);
    }

    #[test]
    fn test_record_appends() {
        let temp = TempDir::new().unwrap();
        let recorder = HistoryRecorder::new(temp.path());

        let first = record(EndReason::Cancelled);
        let mut second = record(EndReason::Completed);
        second.ended_at = first.ended_at;

        recorder.record(&first).unwrap();
        let path = recorder.record(&second).unwrap();

        let entries = HistoryRecorder::load(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].outcome, EndReason::Cancelled);
        assert_eq!(entries[1].outcome, EndReason::Completed);
    }
}
