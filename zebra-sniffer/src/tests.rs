//! Shared test setup for `zebra-sniffer`.

use std::sync::Once;

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber and error reporting hooks for tests.
///
/// Uses the `RUST_LOG` env var, or `warn` by default.
pub(crate) fn init() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer().with_target(false).with_test_writer();
        let filter_layer =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .with(ErrorLayer::default())
            .init();

        color_eyre::install().expect("error hooks are only installed once");
    })
}
