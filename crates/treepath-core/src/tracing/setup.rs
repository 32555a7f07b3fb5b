//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the treepath tracing/logging system.
///
/// Reads the `TREEPATH_LOG` environment variable for per-module log levels.
/// Format: `TREEPATH_LOG=treepath_analysis::paths=debug,treepath_analysis::serialize=warn`
///
/// Falls back to `treepath=info` if `TREEPATH_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TREEPATH_LOG")
            .unwrap_or_else(|_| EnvFilter::new("treepath=info"));

        // A subscriber installed elsewhere (e.g. by an embedding binary) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
