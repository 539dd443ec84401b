//! Client for the MediChat HTTP API.

mod client;
mod error;
mod types;

pub use client::{ApiClient, DEFAULT_API_URL, TOKEN_KEY};
pub use error::{ApiError, ErrorKind};
pub use types::{
    AuthResponse, ChatReply, ChatRequest, ChatSession, Health, LanguageInfo, MessageRecord,
    RegisterRequest, SessionInfo, SessionMessages, User,
};
