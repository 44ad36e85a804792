use super::open_driver;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::logic::STILL_RUNNING;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;
use crate::utils::time::format_hms;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Entries { del } = cmd else {
        return Ok(());
    };

    let mut driver = open_driver(cfg)?;

    if let Some(id) = del {
        if driver.delete_entry(*id)? {
            success(format!("Log {} deleted.", id));
        } else {
            warning(format!("No log entry with id {}.", id));
        }
        return Ok(());
    }

    if driver.entries().is_empty() {
        info("No logs available");
        return Ok(());
    }

    let mut table = Table::new(&["Log", "Date", "Start", "Stop", "Duration"]);
    for entry in driver.entries() {
        table.add_row(vec![
            format!("Log {}", entry.id),
            entry.start_time.format("%Y-%m-%d").to_string(),
            entry.start_str(),
            entry.stop_str().unwrap_or_else(|| STILL_RUNNING.to_string()),
            entry
                .duration()
                .map(|d| format_hms(d.num_seconds().max(0) as u64))
                .unwrap_or_default(),
        ]);
    }

    println!("📝 Log history:\n");
    print!("{}", table.render());
    Ok(())
}
