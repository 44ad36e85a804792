//! Session-duration tracker.
//!
//! Unlike the continuous log, each pause produces a `Session` carrying the
//! duration measured since the last start/resume marker. Resume only
//! annotates the last session; totals per day are derived at export time.

use crate::db::store::{StateStore, keys};
use crate::errors::{AppError, AppResult};
use crate::models::{Session, TrackerClock, TrackerPhase};
use crate::utils::time::format_ms;
use chrono::{DateTime, Local, NaiveDate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTracker {
    clock: TrackerClock,
    history: Vec<Session>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(clock: TrackerClock, history: Vec<Session>) -> Self {
        Self { clock, history }
    }

    /// Restore from the store; missing or malformed values fall back to an
    /// idle tracker with an empty history.
    pub fn load<S: StateStore>(store: &S) -> AppResult<Self> {
        let clock = store
            .load::<TrackerClock>(keys::SESSION_CLOCK)?
            .unwrap_or_default();
        let history = store
            .load::<Vec<Session>>(keys::SESSION_HISTORY)?
            .unwrap_or_default();
        Ok(Self { clock, history })
    }

    pub fn save<S: StateStore>(&self, store: &mut S) -> AppResult<()> {
        store.save(keys::SESSION_CLOCK, &self.clock)?;
        store.save(keys::SESSION_HISTORY, &self.history)
    }

    pub fn phase(&self) -> TrackerPhase {
        self.clock.phase
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.clock.started_at
    }

    pub fn history(&self) -> &[Session] {
        &self.history
    }

    /// Sessions recorded on `date`, in insertion order.
    pub fn sessions_on(&self, date: NaiveDate) -> Vec<&Session> {
        self.history.iter().filter(|s| s.date == date).collect()
    }

    /// Milliseconds accumulated since the current marker (0 unless running).
    pub fn running_ms(&self, now: DateTime<Local>) -> u64 {
        match (self.clock.phase, self.clock.started_at) {
            (TrackerPhase::Running, Some(start)) => elapsed_ms(start, now),
            _ => 0,
        }
    }

    pub fn start(&mut self, now: DateTime<Local>) -> AppResult<()> {
        if self.clock.phase != TrackerPhase::Idle {
            return Err(self.invalid("start"));
        }
        self.clock = TrackerClock {
            phase: TrackerPhase::Running,
            started_at: Some(now),
        };
        Ok(())
    }

    /// Close the running interval and append its session.
    pub fn pause(&mut self, now: DateTime<Local>) -> AppResult<&Session> {
        let start = match (self.clock.phase, self.clock.started_at) {
            (TrackerPhase::Running, Some(start)) => start,
            _ => return Err(self.invalid("pause")),
        };

        self.history.push(Session {
            date: now.date_naive(),
            start_time: start.time(),
            pause_time: now.time(),
            resume_time: None,
            duration: format_ms(elapsed_ms(start, now)),
        });
        self.clock.phase = TrackerPhase::Paused;

        Ok(&self.history[self.history.len() - 1])
    }

    /// Restart accumulation and stamp the resume time on the last session.
    pub fn resume(&mut self, now: DateTime<Local>) -> AppResult<()> {
        if self.clock.phase != TrackerPhase::Paused {
            return Err(self.invalid("resume"));
        }

        if let Some(last) = self.history.last_mut() {
            last.resume_time = Some(now.time());
        }
        self.clock = TrackerClock {
            phase: TrackerPhase::Running,
            started_at: Some(now),
        };
        Ok(())
    }

    /// Back to idle. The history is kept.
    pub fn reset(&mut self) {
        self.clock = TrackerClock::default();
    }

    /// Remove the session at `index` (0-based). Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.history.len() {
            self.history.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    fn invalid(&self, action: &'static str) -> AppError {
        AppError::InvalidTransition {
            action,
            phase: self.clock.phase.as_str(),
        }
    }
}

fn elapsed_ms(start: DateTime<Local>, now: DateTime<Local>) -> u64 {
    (now - start).num_milliseconds().max(0) as u64
}
