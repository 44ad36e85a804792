use crate::cli::parser::{Commands, SessionAction};
use crate::config::Config;
use crate::core::sessions::SessionTracker;
use crate::db::store::{SqliteStore, StateStore};
use crate::errors::{AppError, AppResult};
use crate::export::grouping::group_by_date;
use crate::export::logic::NOT_RESUMED;
use crate::models::Session;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::bold;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Session { action } = cmd else {
        return Ok(());
    };

    let mut store = SqliteStore::open(&cfg.database)?;
    let mut tracker = SessionTracker::load(&store)?;
    let now = Local::now();

    match action {
        SessionAction::Start => {
            tracker.start(now)?;
            tracker.save(&mut store)?;
            store.audit("session_start", "", "Session tracking started");
            success(format!("Session started at {}", now.format("%H:%M:%S")));
        }
        SessionAction::Pause => {
            let session = tracker.pause(now)?.clone();
            tracker.save(&mut store)?;
            store.audit(
                "session_pause",
                &session.date_str(),
                &format!("Session recorded ({})", session.duration),
            );
            success(format!(
                "Paused at {} after {}",
                session.pause_str(),
                session.duration
            ));
        }
        SessionAction::Resume => {
            tracker.resume(now)?;
            tracker.save(&mut store)?;
            store.audit("session_resume", "", "Session tracking resumed");
            success(format!("Resumed at {}", now.format("%H:%M:%S")));
        }
        SessionAction::Reset => {
            tracker.reset();
            tracker.save(&mut store)?;
            info("Session tracker reset (history kept).");
        }
        SessionAction::List { date: filter } => {
            let filter = match filter {
                Some(d) => Some(date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
                None => None,
            };
            print_history(&tracker, filter)?;
        }
        SessionAction::Remove { index } => {
            let removed = index
                .checked_sub(1)
                .is_some_and(|i| tracker.remove(i));
            if removed {
                tracker.save(&mut store)?;
                store.audit("session_remove", &format!("#{index}"), "Session removed");
                success(format!("Session #{} removed.", index));
            } else {
                warning(format!("No session #{}.", index));
            }
        }
        SessionAction::Clear => {
            tracker.clear();
            tracker.save(&mut store)?;
            store.audit("session_clear", "", "Session history cleared");
            success("Session history cleared.");
        }
    }

    Ok(())
}

/// Print sessions grouped by date with per-date totals. `#` is the global
/// position used by `session remove`.
fn print_history(tracker: &SessionTracker, filter: Option<chrono::NaiveDate>) -> AppResult<()> {
    let numbered: Vec<(usize, &Session)> = tracker
        .history()
        .iter()
        .enumerate()
        .filter(|(_, s)| filter.is_none_or(|d| s.date == d))
        .map(|(i, s)| (i + 1, s))
        .collect();

    if numbered.is_empty() {
        match filter {
            Some(d) => info(format!("No history for {}.", d)),
            None => info("No history yet."),
        }
        return Ok(());
    }

    let sessions: Vec<Session> = numbered.iter().map(|(_, s)| (*s).clone()).collect();
    let groups = group_by_date(&sessions)?;

    for group in &groups {
        println!("{} - {}", bold(&group.total()), group.date);
        let in_group = numbered.iter().filter(|(_, s)| s.date == group.date);
        for (n, (global, session)) in in_group.enumerate() {
            println!(
                "  #{} Log {}: Start: {} | Pause: {} | Resume: {} | Duration: {}",
                global,
                n + 1,
                session.start_str(),
                session.pause_str(),
                colorize_optional(session.resume_str().as_deref(), NOT_RESUMED),
                session.duration
            );
        }
    }

    Ok(())
}
