//! A mock [`Connector`] for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::BoxError;

use super::Connector;

/// A [`Connector`] that always succeeds or always fails, and counts its attempts.
#[derive(Debug, Default)]
pub struct MockConnector {
    error: Option<String>,
    attempts: AtomicUsize,
}

impl MockConnector {
    /// Returns a connector that always connects.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Returns a connector that always fails with `error`.
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Returns the number of connection attempts so far.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Connector for MockConnector {
    fn connect(&self) -> Result<(), BoxError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        match &self.error {
            Some(error) => Err(error.clone().into()),
            None => Ok(()),
        }
    }
}
