use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One paused interval of the standalone session tracker.
///
/// `duration` is written once, when the session is paused, as `HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub pause_time: NaiveTime,
    #[serde(default)]
    pub resume_time: Option<NaiveTime>,
    pub duration: String,
}

impl Session {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    pub fn pause_str(&self) -> String {
        self.pause_time.format("%H:%M:%S").to_string()
    }

    pub fn resume_str(&self) -> Option<String> {
        self.resume_time.map(|t| t.format("%H:%M:%S").to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerPhase {
    #[default]
    Idle,
    Running,
    Paused,
}

impl TrackerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerPhase::Idle => "idle",
            TrackerPhase::Running => "running",
            TrackerPhase::Paused => "paused",
        }
    }
}

/// Running marker of the session tracker, persisted on its own so a pause
/// issued later still measures from the right start.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackerClock {
    pub phase: TrackerPhase,
    pub started_at: Option<DateTime<Local>>,
}
