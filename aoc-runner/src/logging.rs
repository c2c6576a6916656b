//! Tracing subscriber setup for solution binaries

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so answers on stdout stay clean. Does nothing if the
/// program already installed a global subscriber.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("aoc_runner=debug,aoc_http_client=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("aoc_runner=info,aoc_http_client=info"))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
