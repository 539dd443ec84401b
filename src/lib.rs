//! # medichat - multilingual medical assistant client
//!
//! `medichat` talks to the MediChat backend: a health assistant that answers
//! in English, with translation to and from French, Ewondo, Douala and
//! Bassa. It keeps conversations per session on the server and shows them in
//! the language you pick.
//!
//! ## Quick Start
//!
//! ```bash
//! # Sign in, then chat interactively
//! medichat login
//! medichat
//!
//! # Chat in French for this run only
//! medichat --lang french
//!
//! # One-shot question from a file or stdin
//! echo "I have had a fever since yesterday" | medichat ask
//!
//! # Browse saved conversations
//! medichat history
//! medichat show 12
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/medichat/config.toml`:
//!
//! ```toml
//! [medichat]
//! api_url = "http://localhost:8000"
//! language = "french"
//! translate = true
//! cache = true
//! timeout_secs = 60
//! tts_command = "espeak-ng -v {voice}"
//! ```
//!
//! `MEDICHAT_API_URL` overrides `api_url`; `MEDICHAT_LOG` sets the log filter.

/// HTTP client for the MediChat backend.
pub mod api;

/// Translation cache management using `SQLite`.
pub mod cache;

/// Conversation state, session manager and interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Interface languages and translation bundles.
pub mod i18n;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration, cache and data.
pub mod paths;

/// Speech input and output adapters.
pub mod speech;

/// Key-value persistence and user preferences.
pub mod store;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
