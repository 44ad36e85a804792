use super::open_driver;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::driver::TimerDriver;
use crate::core::engine::{Command, Signal};
use crate::db::store::StateStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, status_line};
use chrono::Local;

/// Engine command matching a one-shot subcommand.
fn to_command(cmd: &Commands) -> Option<Command> {
    match cmd {
        Commands::Toggle => Some(Command::PauseOrResume),
        Commands::Reset => Some(Command::Reset),
        Commands::Mode { mode } => Some(Command::SwitchMode(*mode)),
        Commands::Edit => Some(Command::ToggleEdit),
        Commands::Move { direction, .. } => Some(Command::MoveCursor(*direction)),
        Commands::Fullscreen => Some(Command::ToggleFullscreen),
        _ => None,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut driver = open_driver(cfg)?;

    if let Commands::Tick { count } = cmd {
        for _ in 0..*count {
            let signal = driver.tick(Local::now())?;
            report_signal(&driver, signal);
        }
    } else if let Some(command) = to_command(cmd) {
        let repeat = match cmd {
            Commands::Move { times, .. } => *times,
            _ => 1,
        };
        for _ in 0..repeat {
            let signal = driver.execute(command, Local::now())?;
            report_signal(&driver, signal);
        }
    }

    println!("{}", status_line(driver.state()));
    Ok(())
}

/// Tell the user which log entry a transition opened or closed.
pub(crate) fn report_signal<S: StateStore>(driver: &TimerDriver<S>, signal: Option<Signal>) {
    match signal {
        Some(Signal::Resumed) => {
            if let Some(entry) = driver.log().open_entry() {
                info(format!("Log {} started at {}", entry.id, entry.start_str()));
            }
        }
        Some(Signal::Paused) => {
            if let Some(entry) = driver.entries().iter().rev().find(|e| !e.is_open()) {
                info(format!(
                    "Log {} stopped at {}",
                    entry.id,
                    entry.stop_str().unwrap_or_default()
                ));
            }
        }
        None => {}
    }
}
