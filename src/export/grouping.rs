//! Date grouping of session-tracker history.

use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::utils::time::{format_ms, parse_duration_ms};
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
    pub total_ms: u64,
}

impl DateGroup {
    /// Sum of the session durations as `HH:MM:SS`.
    pub fn total(&self) -> String {
        format_ms(self.total_ms)
    }
}

/// Group sessions by date.
///
/// Groups appear in first-seen date order and keep the original order of
/// their sessions. A duration that does not parse, or a total that no
/// longer fits, fails the whole grouping.
pub fn group_by_date(sessions: &[Session]) -> AppResult<Vec<DateGroup>> {
    let mut groups: Vec<DateGroup> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for session in sessions {
        let ms = parse_duration_ms(&session.duration)?;

        let slot = *index.entry(session.date).or_insert_with(|| {
            groups.push(DateGroup {
                date: session.date,
                sessions: Vec::new(),
                total_ms: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.sessions.push(session.clone());
        group.total_ms = group
            .total_ms
            .checked_add(ms)
            .ok_or_else(|| AppError::InvalidDuration(format!("total for {}", session.date)))?;
    }

    Ok(groups)
}
