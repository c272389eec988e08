//! A mock [`SyncProgress`] for tests.

use std::sync::{Arc, Mutex};

use super::{Progress, SyncProgress};

/// A [`SyncProgress`] implementation that allows setting the progress externally.
///
/// Clones share the same progress.
#[derive(Clone, Debug, Default)]
pub struct MockSyncProgress {
    progress: Arc<Mutex<Progress>>,
}

impl MockSyncProgress {
    /// Returns a mock reporting `current_block` and `highest_block`.
    pub fn new(current_block: u64, highest_block: u64) -> Self {
        Self {
            progress: Arc::new(Mutex::new(Progress::new(current_block, highest_block))),
        }
    }

    /// Sets the progress returned by `progress()`.
    pub fn set_progress(&self, current_block: u64, highest_block: u64) {
        *self.progress.lock().expect("mock lock is never poisoned") =
            Progress::new(current_block, highest_block);
    }
}

impl SyncProgress for MockSyncProgress {
    fn progress(&self) -> Progress {
        *self.progress.lock().expect("mock lock is never poisoned")
    }
}
