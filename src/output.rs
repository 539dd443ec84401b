//! Global output configuration and user-facing status macros.
//!
//! - Conversation output goes to stdout
//! - Status lines and notices go to stderr
//! - Quiet mode suppresses status lines, never errors or alerts
//! - Colors can be disabled via flag or the `NO_COLOR` environment variable
//!
//! Diagnostic logging is separate and goes through `tracing` (see
//! [`crate::logging`]).

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Sets the global output configuration.
///
/// Only the first call has an effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Prints a status line to stderr unless quiet mode is on.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Prints an alert to stderr, even in quiet mode.
#[macro_export]
macro_rules! alert {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}
