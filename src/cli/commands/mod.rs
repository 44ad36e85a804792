pub mod backup;
pub mod config;
pub mod entries;
pub mod export;
pub mod init;
pub mod log;
pub mod name;
pub mod run;
pub mod session;
pub mod status;
pub mod timer;

use crate::config::Config;
use crate::core::driver::TimerDriver;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

/// Open the configured database and restore the timer from it.
pub(crate) fn open_driver(cfg: &Config) -> AppResult<TimerDriver<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database)?;
    TimerDriver::load(store, cfg.default_mode)
}
