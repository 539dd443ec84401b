use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::output;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A terminal spinner shown while a backend request is in flight.
///
/// Assistant answers can take a while, so the elapsed time is shown next to
/// the message. Clears itself when dropped; hidden entirely in quiet mode.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        if output::is_quiet() {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let progress_bar = ProgressBar::new_spinner();
        let template = if output::is_no_color() {
            "{spinner} {msg} {elapsed}"
        } else {
            "{spinner:.cyan} {msg} {elapsed:.dim}"
        };
        match ProgressStyle::default_spinner().template(template) {
            Ok(style) => progress_bar.set_style(style.tick_strings(TICKS)),
            Err(err) => tracing::debug!(%err, "invalid spinner template"),
        }
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
