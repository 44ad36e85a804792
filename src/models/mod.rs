pub mod log_entry;
pub mod mode;
pub mod session;
pub mod timer_state;

pub use log_entry::LogEntry;
pub use mode::{Direction, EditField, Mode};
pub use session::{Session, TrackerClock, TrackerPhase};
pub use timer_state::TimerState;
