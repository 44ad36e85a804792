// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::grouping::group_by_date;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{CurrentRow, ExportTable, GroupedRow, HistoryRow};
use crate::export::xlsx::export_xlsx;
use crate::models::{LogEntry, Session, TimerState};
use crate::utils::formatting::yes_no;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const CURRENT_SHEET: &str = "TimerData";
pub const HISTORY_SHEET: &str = "LogHistory";
pub const GROUPED_SHEET: &str = "Timer History";

/// Placeholder for an entry that has not been stopped.
pub const STILL_RUNNING: &str = "Still running";
/// Placeholder for a session that was never resumed.
pub const NOT_RESUMED: &str = "N/A";

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Single row describing the timer right now.
    pub fn current_table(state: &TimerState, company: &str, today: NaiveDate) -> ExportTable {
        let row = CurrentRow {
            company: company.to_string(),
            date: today.format("%Y-%m-%d").to_string(),
            timer: state.formatted(),
            mode: state.mode.export_label().to_string(),
            paused: yes_no(state.paused).to_string(),
        };
        ExportTable::from_rows(CURRENT_SHEET, &[row])
    }

    /// One row per continuous log entry.
    pub fn history_table(entries: &[LogEntry], state: &TimerState, today: NaiveDate) -> ExportTable {
        let date = today.format("%Y-%m-%d").to_string();
        let mode = state.mode.export_label();
        let paused = yes_no(state.paused);

        let rows: Vec<HistoryRow> = entries
            .iter()
            .map(|e| HistoryRow {
                date: date.clone(),
                log: format!("Log {}", e.id),
                start: e.start_str(),
                stop: e.stop_str().unwrap_or_else(|| STILL_RUNNING.to_string()),
                mode: mode.to_string(),
                paused: paused.to_string(),
            })
            .collect();

        ExportTable::from_rows(HISTORY_SHEET, &rows)
    }

    /// Sessions grouped by date, each row repeating its group total.
    pub fn grouped_table(sessions: &[Session]) -> AppResult<ExportTable> {
        let groups = group_by_date(sessions)?;

        let rows: Vec<GroupedRow> = groups
            .iter()
            .flat_map(|group| {
                let total = group.total();
                let date = group.date.format("%Y-%m-%d").to_string();
                group
                    .sessions
                    .iter()
                    .enumerate()
                    .map(move |(index, s)| GroupedRow {
                        date: date.clone(),
                        total_duration: total.clone(),
                        log_number: index + 1,
                        start_time: s.start_str(),
                        pause_time: s.pause_str(),
                        resume_time: s.resume_str().unwrap_or_else(|| NOT_RESUMED.to_string()),
                        duration: s.duration.clone(),
                    })
            })
            .collect();

        Ok(ExportTable::from_rows(GROUPED_SHEET, &rows))
    }

    /// Export the timer snapshot and its log into `dir`.
    ///
    /// Returns the written files.
    pub fn export_timer(
        state: &TimerState,
        entries: &[LogEntry],
        company: &str,
        today: NaiveDate,
        format: ExportFormat,
        dir: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        let tables = vec![
            Self::current_table(state, company, today),
            Self::history_table(entries, state, today),
        ];
        let stem = format!("timer_export_{}", today.format("%Y-%m-%d"));
        write_tables(&tables, format, dir, &stem, force)
    }

    /// Export the grouped session history into `dir`.
    pub fn export_sessions(
        sessions: &[Session],
        today: NaiveDate,
        format: ExportFormat,
        dir: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        let tables = vec![Self::grouped_table(sessions)?];
        let stem = format!("timer_history_{}", today.format("%Y-%m-%d"));
        write_tables(&tables, format, dir, &stem, force)
    }
}

/// Output files for `tables`: one per table for CSV, one otherwise.
pub fn output_paths(tables: &[ExportTable], format: ExportFormat, dir: &Path, stem: &str) -> Vec<PathBuf> {
    match format {
        ExportFormat::Csv if tables.len() > 1 => tables
            .iter()
            .map(|t| dir.join(format!("{stem}_{}.csv", t.name.replace(' ', "_"))))
            .collect(),
        _ => vec![dir.join(format!("{stem}.{}", format.as_str()))],
    }
}

fn write_tables(
    tables: &[ExportTable],
    format: ExportFormat,
    dir: &Path,
    stem: &str,
    force: bool,
) -> AppResult<Vec<PathBuf>> {
    ensure_dir(dir)?;

    let paths = output_paths(tables, format, dir, stem);
    for path in &paths {
        ensure_writable(path, force)?;
    }

    match format {
        ExportFormat::Xlsx => export_xlsx(tables, &paths[0])?,
        ExportFormat::Json => export_json(tables, &paths[0])?,
        ExportFormat::Csv => {
            for (table, path) in tables.iter().zip(paths.iter()) {
                export_csv(table, path)?;
            }
        }
    }

    Ok(paths)
}
