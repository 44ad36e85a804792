//! Timer state machine.
//!
//! Every operation is a pure function from the current `TimerState` to a
//! `Transition`. The driver applies the new state, forwards the signal to
//! the session log and saves; nothing here performs I/O.
//!
//! ```text
//! Running <--pause_or_resume--> Paused <--toggle_edit--> Editing
//!    ^                                                      |
//!    +------------------pause_or_resume--------------------+
//! ```

use crate::models::{Direction, EditField, Mode, TimerState};

/// Boundary crossed by a transition, consumed by the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Resumed,
    Paused,
}

/// User commands understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PauseOrResume,
    Reset,
    ToggleEdit,
    SwitchMode(Option<Mode>),
    MoveCursor(Direction),
    ToggleFullscreen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TimerState,
    pub signal: Option<Signal>,
}

impl Transition {
    fn quiet(state: TimerState) -> Self {
        Self {
            state,
            signal: None,
        }
    }
}

pub struct TimerEngine;

impl TimerEngine {
    /// Advance by one tick.
    ///
    /// Paused: only the cursor blink flips (while editing). Running: +1 in
    /// stopwatch mode, -1 in countdown mode; reaching zero in countdown
    /// pauses the timer.
    pub fn tick(state: &TimerState) -> Transition {
        let mut next = state.clone();

        if state.paused {
            if state.is_editing() {
                next.cursor_visible = !state.cursor_visible;
            }
            return Transition::quiet(next);
        }

        match state.mode {
            Mode::Stopwatch => {
                next.elapsed = state.elapsed.saturating_add(1);
                Transition::quiet(next)
            }
            Mode::Countdown => {
                next.elapsed = state.elapsed.saturating_sub(1);
                if next.elapsed == 0 {
                    next.paused = true;
                    return Transition {
                        state: next,
                        signal: Some(Signal::Paused),
                    };
                }
                Transition::quiet(next)
            }
        }
    }

    pub fn apply(state: &TimerState, command: Command) -> Transition {
        match command {
            Command::PauseOrResume => Self::pause_or_resume(state),
            Command::Reset => Self::reset(state),
            Command::ToggleEdit => Self::toggle_edit(state),
            Command::SwitchMode(mode) => Self::switch_mode(state, mode),
            Command::MoveCursor(direction) => Self::move_cursor(state, direction),
            Command::ToggleFullscreen => {
                let mut next = state.clone();
                next.fullscreen = !state.fullscreen;
                Transition::quiet(next)
            }
        }
    }

    /// Toggle between running and paused. Always leaves edit mode.
    pub fn pause_or_resume(state: &TimerState) -> Transition {
        let mut next = state.clone();
        next.paused = !state.paused;
        next.editing = EditField::None;
        next.cursor_visible = false;

        let signal = if next.paused {
            Signal::Paused
        } else {
            Signal::Resumed
        };

        Transition {
            state: next,
            signal: Some(signal),
        }
    }

    /// Zero the counter and pause. Mode is kept.
    pub fn reset(state: &TimerState) -> Transition {
        let next = TimerState {
            elapsed: 0,
            paused: true,
            editing: EditField::None,
            cursor_visible: false,
            ..state.clone()
        };

        Transition {
            state: next,
            signal: state.is_running().then_some(Signal::Paused),
        }
    }

    /// Set the mode, or flip it when `mode` is `None`. Elapsed is kept.
    pub fn switch_mode(state: &TimerState, mode: Option<Mode>) -> Transition {
        let mut next = state.clone();
        next.mode = mode.unwrap_or_else(|| state.mode.toggled());
        Transition::quiet(next)
    }

    /// Enter edit mode on the seconds field, or leave it.
    ///
    /// Editing only exists while paused, so entering it from a running
    /// timer pauses first.
    pub fn toggle_edit(state: &TimerState) -> Transition {
        let mut next = state.clone();

        if state.is_editing() {
            next.editing = EditField::None;
            next.cursor_visible = false;
            return Transition::quiet(next);
        }

        next.editing = EditField::Second;
        next.cursor_visible = true;
        next.paused = true;

        Transition {
            state: next,
            signal: state.is_running().then_some(Signal::Paused),
        }
    }

    pub fn move_cursor(state: &TimerState, direction: Direction) -> Transition {
        if !state.is_editing() {
            return Transition::quiet(state.clone());
        }

        match direction {
            Direction::Up => Self::adjust_field(state, 1),
            Direction::Down => Self::adjust_field(state, -1),
            Direction::Left => {
                let mut next = state.clone();
                next.editing = state.editing.left();
                Transition::quiet(next)
            }
            Direction::Right => {
                let mut next = state.clone();
                next.editing = state.editing.right();
                Transition::quiet(next)
            }
        }
    }

    /// Add `sign` steps of the edited field, clamped at zero.
    pub fn adjust_field(state: &TimerState, sign: i64) -> Transition {
        let mut next = state.clone();
        if !state.is_editing() {
            return Transition::quiet(next);
        }

        let delta = state.editing.step_seconds() * sign.signum();
        let current = i64::try_from(state.elapsed).unwrap_or(i64::MAX);
        next.elapsed = current.saturating_add(delta).max(0) as u64;
        next.paused = true;

        Transition::quiet(next)
    }
}
