use super::export::export_timer;
use super::open_driver;
use super::timer::report_signal;
use crate::config::Config;
use crate::core::clock::{Clock, TICK_INTERVAL};
use crate::core::driver::TimerDriver;
use crate::core::engine::Command;
use crate::db::store::StateStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::models::Direction;
use crate::ui::messages::{error, info, redraw_status, success, warning};
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

/// Messages consumed by the interactive loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Tick,
    Input(String),
    Closed,
}

/// What a line typed in `run` asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    Engine(Command),
    Export,
    Quit,
}

/// Map a typed line to an action. A lone space or `p` toggles the timer,
/// an empty line toggles editing.
pub fn parse_key(line: &str) -> Option<RunAction> {
    if line == " " {
        return Some(RunAction::Engine(Command::PauseOrResume));
    }

    let key = line.trim().to_lowercase();
    if let Some(direction) = Direction::from_key(&key) {
        return Some(RunAction::Engine(Command::MoveCursor(direction)));
    }

    let action = match key.as_str() {
        "p" | "space" => RunAction::Engine(Command::PauseOrResume),
        "" | "e" | "enter" => RunAction::Engine(Command::ToggleEdit),
        "r" => RunAction::Engine(Command::Reset),
        "f" => RunAction::Engine(Command::ToggleFullscreen),
        "m" => RunAction::Engine(Command::SwitchMode(None)),
        "d" => RunAction::Export,
        "q" | "quit" | "exit" => RunAction::Quit,
        _ => return None,
    };
    Some(action)
}

fn print_keys() {
    info("Keys (press Enter after each):");
    println!("  p / space  start or pause the timer");
    println!("  e / enter  edit the displayed time (up/down/left/right or k/j/h/l)");
    println!("  r          reset        m  switch stopwatch/countdown");
    println!("  f          fullscreen   d  export to XLSX");
    println!("  q          quit");
}

/// Forward every line of `reader` as `Event::Input`, then `Event::Closed`
/// at end of input. Stops early once the loop has dropped its receiver.
pub fn spawn_input_reader<R>(reader: R, tx: Sender<Event>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let Ok(line) = line else { break };
            if tx.send(Event::Input(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Event::Closed);
    })
}

/// Ask for a display name when none is stored yet.
fn ensure_display_name<S: StateStore>(driver: &mut TimerDriver<S>) -> AppResult<()> {
    if let Some(name) = driver.display_name()? {
        info(format!("Hello! {}", name));
        return Ok(());
    }

    let stdin = io::stdin();
    loop {
        print!("Write your name: ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        if !line.trim().is_empty() {
            driver.set_display_name(&line)?;
            info(format!("Hello! {}", line.trim()));
            return Ok(());
        }
    }
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut driver = open_driver(cfg)?;
    ensure_display_name(&mut driver)?;
    print_keys();

    let (tx, rx) = mpsc::channel::<Event>();

    let input = spawn_input_reader(io::BufReader::new(io::stdin()), tx.clone());

    let mut clock = Clock::start(TICK_INTERVAL, tx, || Event::Tick);

    redraw_status(driver.state());

    for event in rx.iter() {
        match event {
            Event::Tick => {
                let signal = driver.tick(Local::now())?;
                if signal.is_some() {
                    println!();
                    report_signal(&driver, signal);
                }
            }
            Event::Input(line) => match parse_key(&line) {
                Some(RunAction::Quit) => break,
                Some(RunAction::Export) => {
                    println!();
                    let out_dir = cfg.export_path();
                    if let Err(e) = export_timer(&mut driver, cfg, ExportFormat::Xlsx, &out_dir, true) {
                        error(e);
                    }
                }
                Some(RunAction::Engine(command)) => {
                    let signal = driver.execute(command, Local::now())?;
                    if signal.is_some() {
                        println!();
                        report_signal(&driver, signal);
                    }
                }
                None => {
                    println!();
                    warning(format!("Unknown key '{}'", line.trim()));
                }
            },
            Event::Closed => break,
        }
        redraw_status(driver.state());
    }

    clock.stop();
    drop(rx);

    // A reader still blocked on stdin cannot be woken; it ends with the process.
    if input.is_finished() {
        let _ = input.join();
    }
    println!();
    success("Timer state saved.");
    Ok(())
}
