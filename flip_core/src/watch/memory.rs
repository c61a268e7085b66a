//! In-memory shared buffer

use super::SharedBuffer;
use crate::error::Result;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A [`SharedBuffer`] fed from a script of snapshots
///
/// Each read takes the next scripted snapshot, if any, as the new content.
/// Once the script runs dry the buffer raises `stop`, when one is attached,
/// so a watcher sitting on it ends instead of spinning forever.
#[derive(Debug, Default)]
pub struct MemoryBuffer {
    content: String,
    script: VecDeque<String>,
    clears: usize,
    stop: Option<Arc<AtomicBool>>,
}

impl MemoryBuffer {
    pub fn scripted(snapshots: &[&str]) -> Self {
        MemoryBuffer {
            script: snapshots.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Raise `flag` once every scripted snapshot has been read
    pub fn stop_when_drained(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    /// How many times the buffer was cleared
    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl SharedBuffer for MemoryBuffer {
    fn read(&mut self) -> Result<String> {
        match self.script.pop_front() {
            Some(next) => self.content = next,
            None => {
                if let Some(stop) = &self.stop {
                    stop.store(true, Ordering::SeqCst);
                }
            }
        }
        Ok(self.content.clone())
    }

    fn clear(&mut self) -> Result<()> {
        self.content.clear();
        self.clears += 1;
        Ok(())
    }
}
