//! The sniffer sync gate.
//!
//! The gate opens when the sniffer is enabled, the sniffer service accepts a
//! connection, and the node's chain sync is close to the network's highest block.

use crate::{
    config::Config,
    connector::{self, Connector},
    progress::SyncProgress,
};


/// Decides if the node should report to the sniffer service.
///
/// Created once at startup. The progress source can be attached later,
/// because the syncer usually starts after the gate.
#[derive(Debug)]
pub struct SnifferGate<S, C> {
    /// The resolved sniffer config.
    config: Config,

    /// Probes the sniffer service.
    connector: C,

    /// The node's sync progress, if the syncer has started.
    progress: Option<S>,

    /// The result of the last sync check.
    synced: bool,
}

impl<S, C> SnifferGate<S, C>
where
    S: SyncProgress,
    C: Connector,
{
    /// Returns a new gate without a progress source.
    pub fn new(config: Config, connector: C) -> Self {
        Self {
            config,
            connector,
            progress: None,
            synced: false,
        }
    }

    /// Returns this gate, reading sync progress from `progress`.
    pub fn with_progress(mut self, progress: S) -> Self {
        self.set_progress_source(progress);
        self
    }

    /// Reads sync progress from `progress`, replacing any previous source.
    pub fn set_progress_source(&mut self, progress: S) {
        self.progress = Some(progress);
    }

    /// Returns the gate's config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the gate's connector.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Returns `true` if the sniffer is enabled in the config.
    pub fn is_enabled(&self) -> bool {
        self.config.enable
    }

    /// Returns the result of the last sync check.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    /// Checks if the node is within the configured delta of the highest block,
    /// and stores the result.
    ///
    /// Returns `false` if there is no progress source yet.
    pub fn check_synced(&mut self) -> bool {
        let synced = match &self.progress {
            Some(source) => {
                let progress = source.progress();
                let synced = progress.is_synced(self.config.delta);

                debug!(
                    current_block = progress.current_block,
                    highest_block = progress.highest_block,
                    delta = self.config.delta,
                    synced,
                    "Mamoru Sniffer sync",
                );

                synced
            }
            None => false,
        };

        if synced != self.synced {
            info!(synced, "Mamoru Sniffer sync status changed");
        }

        self.synced = synced;
        synced
    }

    /// Returns `true` if the sniffer service accepted a connection.
    pub fn connect(&self) -> bool {
        connector::connect(&self.connector)
    }

    /// Returns `true` if the node should report to the sniffer service.
    ///
    /// Every check runs on each call, so the connection is always attempted
    /// and the stored sync status is refreshed, even if the gate is closed.
    pub fn check_requirements(&mut self) -> bool {
        let enabled = self.is_enabled();
        let connected = self.connect();
        let synced = self.check_synced();

        let ready = enabled && connected && synced;
        debug!(enabled, connected, synced, ready, "checked sniffer requirements");

        ready
    }
}
