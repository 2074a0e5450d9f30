use tracing_subscriber::EnvFilter;

use crate::server::default_config::DEFAULT_LOG_FILTER;

/// Installs the global `tracing` subscriber.
///
/// The filter is read from `POSTY_LOG` (e.g. `debug`, `posty_backend=trace`)
/// and falls back to `info`. Output goes to stderr so it never mixes with
/// CLI output. Calling it twice is harmless: the second
/// installation attempt is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("POSTY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
