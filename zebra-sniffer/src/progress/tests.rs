//! Tests for sync progress.

mod vectors;
