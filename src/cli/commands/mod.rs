//! Subcommand implementations.

/// One-shot message command handler.
pub mod ask;

/// Sign-in and account command handlers.
pub mod auth;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Language listing command handlers.
pub mod languages;

/// Saved conversation command handlers.
pub mod sessions;

/// Translation command handler.
pub mod translate;
