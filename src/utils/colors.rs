/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Running → green, paused → red.
pub fn color_for_state(paused: bool) -> &'static str {
    if paused { RED } else { GREEN }
}

/// Grey out placeholder values such as "N/A" or "Still running".
pub fn colorize_optional(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}{placeholder}{RESET}"),
    }
}
