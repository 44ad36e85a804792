use super::mode::{EditField, Mode};
use crate::utils::time::format_hms;
use serde::{Deserialize, Serialize};

/// Persisted snapshot of the timer.
///
/// `elapsed` is the count-up value in stopwatch mode and the remaining
/// value in countdown mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub elapsed: u64,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_paused")]
    pub paused: bool,
    #[serde(default)]
    pub editing: EditField,
    #[serde(default)]
    pub cursor_visible: bool,
    #[serde(default)]
    pub fullscreen: bool,
}

fn default_paused() -> bool {
    true
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            elapsed: 0,
            mode: Mode::Stopwatch,
            paused: true,
            editing: EditField::None,
            cursor_visible: false,
            fullscreen: false,
        }
    }
}

impl TimerState {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        !self.paused
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_editing()
    }

    /// `HH:MM:SS` rendering of `elapsed`.
    pub fn formatted(&self) -> String {
        format_hms(self.elapsed)
    }

    pub fn hours(&self) -> u64 {
        self.elapsed / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.elapsed % 3600) / 60
    }

    pub fn seconds(&self) -> u64 {
        self.elapsed % 60
    }
}
