//! Forwards log entries from the sniffer client library to `tracing`.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};


/// The prefix added to every forwarded log message.
pub const MESSAGE_PREFIX: &str = "Mamoru core: ";

/// The severity of a sniffer client log entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// A log entry emitted by the sniffer client library.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct LogEntry {
    /// The entry's severity.
    pub level: LogLevel,

    /// The log message.
    pub message: String,

    /// Structured context for the message.
    #[serde(default)]
    pub ctx: HashMap<String, String>,
}

/// Flattens `ctx` into alternating keys and values: `[k1, v1, k2, v2, ...]`.
///
/// Pairs are in map iteration order, but each value directly follows its key.
pub fn map_to_key_values(ctx: &HashMap<String, String>) -> Vec<String> {
    ctx.iter()
        .flat_map(|(key, value)| [key.clone(), value.clone()])
        .collect()
}

/// Displays alternating keys and values as `k1=v1 k2=v2`.
#[derive(Copy, Clone, Debug)]
pub struct KeyValues<'a>(pub &'a [String]);

impl fmt::Display for KeyValues<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, pair) in self.0.chunks(2).enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }

            match pair {
                [key, value] => write!(f, "{key}={value}")?,
                [key] => write!(f, "{key}=")?,
                _ => unreachable!("chunks are never empty"),
            }
        }

        Ok(())
    }
}

/// Logs `entry` at its level, with its context in the `ctx` field.
pub fn forward(entry: &LogEntry) {
    let key_values = map_to_key_values(&entry.ctx);
    let ctx = KeyValues(&key_values);
    let message = &entry.message;

    match entry.level {
        LogLevel::Error => error!(%ctx, "{MESSAGE_PREFIX}{message}"),
        LogLevel::Warn => warn!(%ctx, "{MESSAGE_PREFIX}{message}"),
        LogLevel::Info => info!(%ctx, "{MESSAGE_PREFIX}{message}"),
        LogLevel::Debug => debug!(%ctx, "{MESSAGE_PREFIX}{message}"),
        LogLevel::Trace => trace!(%ctx, "{MESSAGE_PREFIX}{message}"),
    }
}
