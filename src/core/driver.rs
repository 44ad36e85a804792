//! Applies engine transitions and owns the single persistence point.
//!
//! Each command goes through two phases: the pure transition computed by
//! `TimerEngine`, then one `commit` that updates the in-memory state, feeds
//! the session log and saves. When the save fails the in-memory state is
//! already updated and the caller receives `AppError::Persistence`.

use crate::core::engine::{Command, Signal, TimerEngine, Transition};
use crate::core::session_log::SessionLog;
use crate::db::store::{StateStore, keys};
use crate::errors::{AppError, AppResult};
use crate::models::{LogEntry, Mode, TimerState};
use chrono::{DateTime, Local};

pub struct TimerDriver<S: StateStore> {
    store: S,
    state: TimerState,
    log: SessionLog,
}

impl<S: StateStore> TimerDriver<S> {
    /// Restore timer and log from `store`, falling back to defaults.
    pub fn load(store: S, default_mode: Mode) -> AppResult<Self> {
        let state = store
            .load::<TimerState>(keys::TIMER_STATE)?
            .unwrap_or_else(|| TimerState::with_mode(default_mode));
        let log = store
            .load::<SessionLog>(keys::LOG_ENTRIES)?
            .unwrap_or_default();

        Ok(Self { store, state, log })
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn entries(&self) -> &[LogEntry] {
        self.log.entries()
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn tick(&mut self, now: DateTime<Local>) -> AppResult<Option<Signal>> {
        let transition = TimerEngine::tick(&self.state);
        self.commit(transition, now)
    }

    pub fn execute(&mut self, command: Command, now: DateTime<Local>) -> AppResult<Option<Signal>> {
        let transition = TimerEngine::apply(&self.state, command);
        let signal = self.commit(transition, now)?;

        match command {
            Command::Reset => self.store.audit("reset", "", "Timer reset to 00:00:00"),
            Command::SwitchMode(_) => {
                let mode = self.state.mode.as_str();
                self.store.audit("mode", mode, &format!("Switched to {mode}"));
            }
            _ => {}
        }

        Ok(signal)
    }

    /// Delete a log entry by id. Unknown ids are not an error.
    pub fn delete_entry(&mut self, id: u32) -> AppResult<bool> {
        if !self.log.delete_entry(id) {
            return Ok(false);
        }

        self.store.save(keys::LOG_ENTRIES, &self.log)?;
        self.store
            .audit("delete", &format!("log {id}"), "Log entry deleted");
        Ok(true)
    }

    pub fn display_name(&self) -> AppResult<Option<String>> {
        self.store.load::<String>(keys::DISPLAY_NAME)
    }

    pub fn set_display_name(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }
        self.store.save(keys::DISPLAY_NAME, &name.to_string())
    }

    fn commit(&mut self, transition: Transition, now: DateTime<Local>) -> AppResult<Option<Signal>> {
        let Transition { state, signal } = transition;

        if state == self.state && signal.is_none() {
            return Ok(None);
        }

        self.state = state;

        if let Some(signal) = signal {
            self.log.apply(signal, now);
            self.audit_signal(signal);
        }

        self.store.save(keys::TIMER_STATE, &self.state)?;
        if signal.is_some() {
            self.store.save(keys::LOG_ENTRIES, &self.log)?;
        }

        Ok(signal)
    }

    fn audit_signal(&mut self, signal: Signal) {
        let elapsed = self.state.formatted();
        match signal {
            Signal::Resumed => {
                let id = self.log.open_entry().map(|e| e.id).unwrap_or_default();
                self.store
                    .audit("resume", &format!("log {id}"), &format!("Timer resumed at {elapsed}"));
            }
            Signal::Paused => {
                self.store
                    .audit("pause", "", &format!("Timer paused at {elapsed}"));
            }
        }
    }
}
