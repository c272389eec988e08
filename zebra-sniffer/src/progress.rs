//! The node's chain sync progress, as seen by the sniffer gate.

use tokio::sync::watch;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

#[cfg(any(test, feature = "proptest-impl"))]
pub mod mock;

#[cfg(test)]
mod tests;

/// A snapshot of the node's chain sync progress.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Progress {
    /// The height of the best block the node has committed.
    pub current_block: u64,

    /// The height of the best block reported by the network.
    pub highest_block: u64,
}

impl Progress {
    /// Returns a new progress snapshot.
    pub fn new(current_block: u64, highest_block: u64) -> Self {
        Self {
            current_block,
            highest_block,
        }
    }

    /// Returns a watch channel for publishing progress snapshots,
    /// starting with no progress.
    pub fn channel() -> (watch::Sender<Progress>, watch::Receiver<Progress>) {
        watch::channel(Progress::default())
    }

    /// Returns `false` until the node or the network has reported any progress.
    pub fn is_bootstrapped(&self) -> bool {
        self.current_block != 0 || self.highest_block != 0
    }

    /// Returns `true` if the node is at most `delta` blocks behind the highest block.
    ///
    /// A node that hasn't been bootstrapped is never synced,
    /// even though its current block equals the highest block.
    pub fn is_synced(&self, delta: i64) -> bool {
        if !self.is_bootstrapped() {
            return false;
        }

        // `u64 + i64` can't overflow an `i128`.
        i128::from(self.current_block) + i128::from(delta) >= i128::from(self.highest_block)
    }
}

/// An interface for reading the node's chain sync progress.
pub trait SyncProgress {
    /// Returns the latest sync progress snapshot.
    fn progress(&self) -> Progress;
}

impl SyncProgress for watch::Receiver<Progress> {
    fn progress(&self) -> Progress {
        *self.borrow()
    }
}

impl<T> SyncProgress for &T
where
    T: SyncProgress + ?Sized,
{
    fn progress(&self) -> Progress {
        (**self).progress()
    }
}

impl<T> SyncProgress for std::sync::Arc<T>
where
    T: SyncProgress + ?Sized,
{
    fn progress(&self) -> Progress {
        (**self).progress()
    }
}
