//! Remembered cursor positions, keyed by file path.
//!
//! Positions live in their own settings namespace because they change on
//! every file close, far more often than the main preferences.

use crate::settings::Settings;
use indexmap::IndexMap;
use toml::{Table, Value};

pub const CURSOR_POSITIONS_KEY: &str = "cursorPositions";

/// Path → character offset map with a load-once guard.
#[derive(Debug, Clone, Default)]
pub struct CursorPositions {
    positions: IndexMap<String, u64>,
    retrieved: bool,
}

impl CursorPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the stored map has already been read.
    pub fn is_retrieved(&self) -> bool {
        self.retrieved
    }

    /// Reads the stored map the first time it is called; later calls do nothing.
    ///
    /// Entries that are not non-negative integers are skipped. Positions
    /// recorded before the first load are kept and win over stored ones.
    pub fn load_once(&mut self, settings: &Settings) {
        if self.retrieved {
            return;
        }
        self.retrieved = true;

        let stored = settings.group(CURSOR_POSITIONS_KEY);
        let mut skipped = 0usize;
        for path in stored.keys() {
            let value = stored.int(&path).and_then(|i| u64::try_from(i).ok());
            match value {
                Some(pos) => {
                    self.positions.entry(path).or_insert(pos);
                }
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!("Skipped {skipped} malformed cursor positions");
        }
        tracing::debug!("Loaded {} cursor positions", self.positions.len());
    }

    /// Stores the map into `settings`. Returns false if there was nothing to store.
    pub fn store(&self, settings: &mut Settings) -> bool {
        if self.positions.is_empty() {
            return false;
        }
        let table: Table = self
            .positions
            .iter()
            .map(|(path, pos)| {
                let pos = i64::try_from(*pos).unwrap_or(i64::MAX);
                (path.clone(), Value::Integer(pos))
            })
            .collect();
        settings.set_group(CURSOR_POSITIONS_KEY, table);
        true
    }

    pub fn get(&self, path: &str) -> Option<u64> {
        self.positions.get(path).copied()
    }

    pub fn insert(&mut self, path: impl Into<String>, pos: u64) {
        self.positions.insert(path.into(), pos);
    }

    pub fn remove(&mut self, path: &str) -> Option<u64> {
        self.positions.shift_remove(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
