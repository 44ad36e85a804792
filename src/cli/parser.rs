use crate::export::ExportFormat;
use crate::models::{Direction, Mode};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimekeeper
/// Stopwatch / countdown with pause-resume logging, backed by SQLite
#[derive(Parser)]
#[command(
    name = "rtimekeeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "A stopwatch/countdown CLI: log every pause and resume, survive restarts, export to spreadsheets",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the timer, its mode and the open log entry
    Status,

    /// Start the timer when paused, pause it when running
    Toggle,

    /// Set the timer back to 00:00:00 (the log is kept)
    Reset,

    /// Switch between stopwatch and countdown
    Mode {
        /// Target mode; flips the current one when omitted
        #[arg(value_enum)]
        mode: Option<Mode>,
    },

    /// Enter or leave in-place editing of the displayed time
    Edit,

    /// Move the edit cursor (left/right) or adjust the edited field (up/down)
    Move {
        #[arg(value_enum)]
        direction: Direction,

        /// Repeat the movement
        #[arg(long, short = 'n', default_value_t = 1)]
        times: u32,
    },

    /// Toggle the fullscreen flag of the display
    Fullscreen,

    /// Advance the timer by one or more ticks without waiting
    Tick {
        #[arg(long, short = 'c', default_value_t = 1)]
        count: u32,
    },

    /// Interactive mode: tick every second and read commands from stdin
    Run,

    /// List the pause/resume log entries, or delete one
    Entries {
        #[arg(long = "del", value_name = "ID", help = "Delete the log entry with this id")]
        del: Option<u32>,
    },

    /// Standalone session tracker (one record per pause, grouped by date)
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show or set the display name
    Name {
        /// New display name
        name: Option<String>,
    },

    /// Export the timer and its log, or the grouped session history
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output directory (defaults to `export_dir` from the configuration)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        /// Export the session tracker history grouped by date
        #[arg(long = "history")]
        history: bool,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only show rows with this operation")]
        operation: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start tracking
    Start,
    /// Pause and record a session
    Pause,
    /// Resume after a pause
    Resume,
    /// Stop tracking without recording (history is kept)
    Reset,
    /// List recorded sessions grouped by date
    List {
        /// Only show sessions of this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove a session by the `#` number shown in `session list`
    Remove { index: usize },
    /// Remove every recorded session
    Clear,
}
