//! Sync gate for Zebra's Mamoru sniffer integration.
//!
//! The sniffer is an external monitoring service a node can optionally report to.
//! Reporting only makes sense once:
//!
//! - the operator has enabled it (`MAMORU_SNIFFER_ENABLE`),
//! - the sniffer service accepts a connection, and
//! - the node's chain sync is within `delta` blocks of the highest block
//!   its peers have reported (`MAMORU_SNIFFER_DELTA`).
//!
//! [`SnifferGate::check_requirements`] combines those three signals.
//! The sniffer client library, the sync progress provider and the log
//! backend are supplied by the caller through [`Connector`], [`SyncProgress`]
//! and `tracing`.
#![doc(html_favicon_url = "https://www.zfnd.org/images/zebra-favicon-128.png")]
#![doc(html_logo_url = "https://www.zfnd.org/images/zebra-icon.png")]
#![doc(html_root_url = "https://doc.zebra.zfnd.org/zebra_sniffer")]
// Standard lints
#![warn(missing_docs)]
#![deny(clippy::await_holding_lock)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate tracing;

pub mod config;
pub mod connector;
pub mod gate;
pub mod log;
pub mod progress;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, DEFAULT_DELTA};
pub use connector::Connector;
pub use gate::SnifferGate;
pub use log::{LogEntry, LogLevel};
pub use progress::{Progress, SyncProgress};

/// Error type alias for failures reported by external collaborators.
///
/// Note: the 'static lifetime bound means that the *type* cannot have any
/// non-'static lifetimes, (e.g., when a type contains a borrow and is
/// parameterized by 'a), *not* that the object itself has 'static lifetime.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
