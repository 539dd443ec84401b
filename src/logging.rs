//! Diagnostic logging setup.
//!
//! Logs go to stderr. The filter comes from `MEDICHAT_LOG` (for example
//! `MEDICHAT_LOG=medichat=debug`); without it only warnings are shown, or
//! debug output with `--verbose`.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MEDICHAT_LOG";

/// Installs the global tracing subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "medichat=debug,warn"
        } else {
            "warn"
        })
    })
}
