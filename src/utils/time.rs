//! Time utilities: `HH:MM:SS` formatting and parsing of stored durations.

use crate::errors::{AppError, AppResult};

/// Format a number of seconds as `HH:MM:SS` (hours are not wrapped at 24).
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format milliseconds as `HH:MM:SS`, dropping the sub-second part.
pub fn format_ms(milliseconds: u64) -> String {
    format_hms(milliseconds / 1000)
}

/// Parse an `H:MM:SS` duration into milliseconds.
///
/// Every fragment must be made of ASCII digits only; a malformed string or
/// a value too large for `u64` milliseconds is an error rather than a
/// silent zero.
pub fn parse_duration_ms(duration: &str) -> AppResult<u64> {
    let invalid = || AppError::InvalidDuration(duration.to_string());

    let parts: Vec<&str> = duration.trim().split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let mut fields = [0u64; 3];
    for (slot, part) in fields.iter_mut().zip(parts.iter()) {
        let part = part.trim();
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = part.parse::<u64>().map_err(|_| invalid())?;
    }

    let [hours, minutes, seconds] = fields;
    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .and_then(|total| total.checked_mul(1000))
        .ok_or_else(invalid)
}
