use crate::models::{EditField, TimerState};
use crate::utils::colors::{CYAN, RESET, color_for_state};
use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// `HH:MM:SS` with the edited field highlighted while its cursor is shown.
pub fn render_clock(state: &TimerState) -> String {
    let field = |value: u64, which: EditField| {
        if state.editing == which && state.cursor_visible {
            format!("{CYAN}[{value:02}]{RESET}")
        } else if state.editing == which {
            format!(" {value:02} ")
        } else {
            format!("{value:02}")
        }
    };

    format!(
        "{}:{}:{}",
        field(state.hours(), EditField::Hour),
        field(state.minutes(), EditField::Minute),
        field(state.seconds(), EditField::Second)
    )
}

/// One-line status used by `status` and the interactive loop.
pub fn status_line(state: &TimerState) -> String {
    let label = if state.is_editing() {
        "editing"
    } else if state.paused {
        "paused"
    } else {
        "running"
    };

    format!(
        "⏱️  {} {}{}{} [{}]{}",
        render_clock(state),
        color_for_state(state.paused),
        label,
        RESET,
        state.mode.as_str(),
        if state.fullscreen { " ⛶" } else { "" }
    )
}

/// Redraw the status line in place.
pub fn redraw_status(state: &TimerState) {
    print!("\r\x1b[2K{}", status_line(state));
    io::stdout().flush().ok();
}
