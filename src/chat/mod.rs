//! Chat sessions: conversation state, its manager and the interactive REPL.

mod backend;
/// Slash command parsing and autocomplete.
pub mod command;
mod conversation;
mod manager;
mod message;
mod notice;
mod repl;
#[cfg(test)]
mod testing;
mod ui;

pub use backend::ChatBackend;
pub use conversation::{Conversation, PendingTurn};
pub use manager::ChatManager;
pub use message::{Message, Sender, WELCOME_MESSAGE_ID};
pub use notice::{Description, Notice, NoticeLevel};
pub use repl::{ChatRepl, ReplOptions};
pub use ui::{print_history, print_message, print_notice, print_transcript};
