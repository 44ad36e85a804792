//! Continuous-entry log: one `LogEntry` per running interval.

use crate::core::engine::Signal;
use crate::models::LogEntry;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The currently running entry, if any.
    pub fn open_entry(&self) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.is_open())
    }

    /// `max + 1`, or the lowest free id once `u32::MAX` is taken.
    fn next_id(&self) -> u32 {
        let max = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        match max.checked_add(1) {
            Some(id) => id,
            None => (1..u32::MAX)
                .find(|id| self.entries.iter().all(|e| e.id != *id))
                .unwrap_or(u32::MAX),
        }
    }

    pub fn apply(&mut self, signal: Signal, now: DateTime<Local>) {
        match signal {
            Signal::Resumed => {
                self.on_resumed(now);
            }
            Signal::Paused => {
                self.on_paused(now);
            }
        }
    }

    /// Open a new entry and return its id.
    ///
    /// An entry left open by an earlier inconsistency is closed at `now`
    /// first, so at most one entry is ever open.
    pub fn on_resumed(&mut self, now: DateTime<Local>) -> u32 {
        self.on_paused(now);
        let id = self.next_id();
        self.entries.push(LogEntry::open(id, now));
        id
    }

    /// Close the open entry. Returns its id, or `None` when nothing was open.
    pub fn on_paused(&mut self, now: DateTime<Local>) -> Option<u32> {
        let entry = self.entries.iter_mut().find(|e| e.is_open())?;
        entry.stop_time = Some(now);
        Some(entry.id)
    }

    /// Remove the entry with `id`. Returns whether something was removed.
    pub fn delete_entry(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}
