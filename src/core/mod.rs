pub mod backup;
pub mod clock;
pub mod driver;
pub mod engine;
pub mod log;
pub mod session_log;
pub mod sessions;

pub use clock::Clock;
pub use driver::TimerDriver;
pub use engine::{Command, Signal, TimerEngine, Transition};
pub use session_log::SessionLog;
pub use sessions::SessionTracker;
