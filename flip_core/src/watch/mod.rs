//! Watching a shared text buffer for new content
//!
//! The buffer is process-external state (normally the system clipboard).
//! It is reached only through [`SharedBuffer`], a read-and-clear capability.

mod memory;

pub use memory::MemoryBuffer;

use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default wait between two reads of the buffer
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Read-and-clear access to a shared text buffer
pub trait SharedBuffer {
    /// Current content; an empty buffer reads as `""`
    fn read(&mut self) -> Result<String>;

    /// Reset the content to empty
    fn clear(&mut self) -> Result<()>;
}

/// Result of waiting for new content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchOutcome {
    Block(String),
    Interrupted,
}

/// Polls a [`SharedBuffer`] until its content changes
pub struct Watcher<B: SharedBuffer> {
    buffer: B,
    interval: Duration,
    interrupted: Arc<AtomicBool>,
}

impl<B: SharedBuffer> Watcher<B> {
    pub fn new(buffer: B, interrupted: Arc<AtomicBool>) -> Self {
        Watcher {
            buffer,
            interval: POLL_INTERVAL,
            interrupted,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Sleep one poll interval, used after a failed read
    pub fn backoff(&self) {
        thread::sleep(self.interval);
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Block until the buffer differs from what it held when this was called
    ///
    /// The buffer is cleared after every change, so the next call starts
    /// from an empty baseline.
    pub fn next_block(&mut self) -> Result<WatchOutcome> {
        if self.is_interrupted() {
            return Ok(WatchOutcome::Interrupted);
        }

        let baseline = self.buffer.read()?;
        tracing::info!("Waiting for new input...");

        loop {
            if self.is_interrupted() {
                return Ok(WatchOutcome::Interrupted);
            }

            let current = self.buffer.read()?;
            if current != baseline {
                self.buffer.clear()?;
                tracing::debug!(bytes = current.len(), "buffer changed");
                return Ok(WatchOutcome::Block(current));
            }

            thread::sleep(self.interval);
        }
    }
}
