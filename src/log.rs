// Logging initialization for the binary
use tracing_subscriber::{
    fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the global subscriber; `verbose` turns on debug events for this crate.
///
/// `RUST_LOG` replaces the default filter when set. Events go to stderr so
/// report output on stdout stays machine-readable.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,household_budget=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(env_filter)
        .try_init();
}
