//! Consistent styling helpers for terminal output.
//!
//! Colors are dropped when `NO_COLOR` is set or `--no-color` style output is
//! configured through [`crate::output`].

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

pub struct Style;

impl Style {
    /// Section headers ("Chat history", "Configuration").
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| t.bold().to_string())
    }

    /// Labels and keys ("api_url", "language").
    pub fn label<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    /// Primary values.
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| t.cyan().to_string())
    }

    /// Secondary information such as timestamps and descriptions.
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t| t.red().bold().to_string())
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }

    /// Slash commands ("/help", "/load").
    pub fn command<T: Display>(text: T) -> String {
        paint(text, |t| t.green().to_string())
    }

    /// Language tags.
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }

    pub fn hint<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().italic().to_string())
    }

    /// Speaker prefix for the user's messages.
    pub fn user<T: Display>(text: T) -> String {
        paint(text, |t| t.blue().bold().to_string())
    }

    /// Speaker prefix for the assistant's messages.
    pub fn bot<T: Display>(text: T) -> String {
        paint(text, |t| t.magenta().bold().to_string())
    }

    pub fn default_marker() -> String {
        Self::secondary("(default)")
    }

    pub fn version<T: Display>(text: T) -> String {
        Self::secondary(text)
    }
}

fn paint<T: Display>(text: T, styled: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(&text)
    }
}
