//! Tick source for the interactive loop.
//!
//! The clock owns a background thread that sends one message per interval
//! into the event channel. It stops when `stop` is called or when the
//! clock is dropped, and the thread is always joined.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Fixed cadence of the timer.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub struct Clock {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Start ticking into `tx`, producing `make_tick()` every `interval`.
    ///
    /// The thread also ends on its own once the receiving side is gone.
    pub fn start<E, F>(interval: Duration, tx: Sender<E>, make_tick: F) -> Self
    where
        E: Send + 'static,
        F: Fn() -> E + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tx.send(make_tick()).is_err() {
                            break;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop ticking and wait for the thread. Idempotent.
    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.stop();
    }
}
