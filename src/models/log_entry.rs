use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// One running interval of the timer (continuous-entry model).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    pub start_time: DateTime<Local>,
    /// `None` while the interval is still running.
    pub stop_time: Option<DateTime<Local>>,
}

impl LogEntry {
    pub fn open(id: u32, start_time: DateTime<Local>) -> Self {
        Self {
            id,
            start_time,
            stop_time: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.stop_time.is_none()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.stop_time.map(|stop| stop - self.start_time)
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    pub fn stop_str(&self) -> Option<String> {
        self.stop_time.map(|t| t.format("%H:%M:%S").to_string())
    }
}
