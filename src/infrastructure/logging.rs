//! Tracing setup for the command-line tool.
//!
//! Configure via the `RUST_LOG` environment variable, e.g.
//! `RUST_LOG=flow_outline=debug`. Output goes to stderr so stdout stays
//! reserved for the outline itself.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Install the global subscriber. `verbose` raises the default level from
/// `warn` to `debug` when `RUST_LOG` is not set.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
