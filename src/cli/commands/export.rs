use super::open_driver;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::driver::TimerDriver;
use crate::core::sessions::SessionTracker;
use crate::db::store::StateStore;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        dir,
        history,
        force,
    } = cmd
    {
        let out_dir = dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.export_path());

        let mut driver = open_driver(cfg)?;

        if *history {
            let tracker = SessionTracker::load(driver.store())?;
            let written = ExportLogic::export_sessions(
                tracker.history(),
                date::today(),
                *format,
                &out_dir,
                *force,
            )?;
            audit_export(driver.store_mut(), &written);
        } else {
            export_timer(&mut driver, cfg, *format, &out_dir, *force)?;
        }
    }
    Ok(())
}

/// Export the timer snapshot and its log. Shared with the interactive loop.
pub(crate) fn export_timer<S: StateStore>(
    driver: &mut TimerDriver<S>,
    cfg: &Config,
    format: ExportFormat,
    out_dir: &std::path::Path,
    force: bool,
) -> AppResult<Vec<PathBuf>> {
    let written = ExportLogic::export_timer(
        driver.state(),
        driver.entries(),
        &cfg.company,
        date::today(),
        format,
        out_dir,
        force,
    )?;
    audit_export(driver.store_mut(), &written);
    Ok(written)
}

fn audit_export<S: StateStore>(store: &mut S, written: &[PathBuf]) {
    for path in written {
        store.audit("export", &path.to_string_lossy(), "Export written");
    }
}
