pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod store;

pub use store::{MemoryStore, SqliteStore, StateStore, keys};
