use serde::{Deserialize, Serialize};

/// Counting direction of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Stopwatch,
    Countdown,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Stopwatch => "stopwatch",
            Mode::Countdown => "countdown",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Mode::Stopwatch => Mode::Countdown,
            Mode::Countdown => Mode::Stopwatch,
        }
    }

    /// Label written in exported spreadsheets.
    pub fn export_label(&self) -> &'static str {
        match self {
            Mode::Stopwatch => "Workhours",
            Mode::Countdown => "countdown",
        }
    }
}

/// Which displayed field reacts to up/down adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditField {
    #[default]
    None,
    Hour,
    Minute,
    Second,
}

impl EditField {
    /// Seconds added or removed by one adjustment step.
    pub fn step_seconds(&self) -> i64 {
        match self {
            EditField::None => 0,
            EditField::Hour => 3600,
            EditField::Minute => 60,
            EditField::Second => 1,
        }
    }

    pub fn is_editing(&self) -> bool {
        !matches!(self, EditField::None)
    }

    /// Field to the left (towards hours). Clamped at `Hour`.
    pub fn left(&self) -> Self {
        match self {
            EditField::Second => EditField::Minute,
            EditField::Minute | EditField::Hour => EditField::Hour,
            EditField::None => EditField::None,
        }
    }

    /// Field to the right (towards seconds). Clamped at `Second`.
    pub fn right(&self) -> Self {
        match self {
            EditField::Hour => EditField::Minute,
            EditField::Minute | EditField::Second => EditField::Second,
            EditField::None => EditField::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "k" => Some(Direction::Up),
            "down" | "j" => Some(Direction::Down),
            "left" | "h" => Some(Direction::Left),
            "right" | "l" => Some(Direction::Right),
            _ => None,
        }
    }
}
