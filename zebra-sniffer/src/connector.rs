//! Connection probe for the external sniffer service.

use crate::BoxError;

#[cfg(any(test, feature = "proptest-impl"))]
pub mod mock;


/// An interface for connecting to the sniffer service.
///
/// The gate only uses the connection as a liveness probe, so implementations
/// don't return a connection handle. Any timeout belongs to the implementation.
pub trait Connector {
    /// Tries to connect to the sniffer service.
    fn connect(&self) -> Result<(), BoxError>;
}

impl<F, E> Connector for F
where
    F: Fn() -> Result<(), E>,
    E: Into<BoxError>,
{
    fn connect(&self) -> Result<(), BoxError> {
        self().map_err(Into::into)
    }
}

/// Returns `true` if `connector` connected to the sniffer service.
///
/// Connection errors are logged, then discarded.
pub fn connect<C>(connector: &C) -> bool
where
    C: Connector + ?Sized,
{
    match connector.connect() {
        Ok(()) => true,
        Err(error) => {
            error!(error = %sanitize_error(&*error), "Mamoru Sniffer connect");
            false
        }
    }
}

/// Flattens a multi-line error message into a single log line.
pub fn sanitize_error(error: &(dyn std::error::Error + 'static)) -> String {
    error.to_string().replace(['\t', '\n'], "")
}
