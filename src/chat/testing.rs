//! In-memory backend for manager tests.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Barrier;

use super::ChatBackend;
use super::Sender;
use crate::api::{
    ApiError, ChatReply, ChatRequest, ChatSession, MessageRecord, SessionInfo, SessionMessages,
};
use crate::i18n::Language;

/// Session id that `session_messages` reports as missing.
pub const MISSING_SESSION: i64 = 404;

#[derive(Default)]
struct State {
    sent: Vec<ChatRequest>,
    history_calls: usize,
    translate_calls: usize,
    fail_send: bool,
    fail_translate: bool,
    fail_history: bool,
    fail_delete: bool,
}

/// Answers every message with a fixed reply and "translates" by prefixing
/// the target tag: `[french] text`.
pub struct FakeBackend {
    session_id: i64,
    reply: String,
    state: Mutex<State>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            session_id: 1,
            reply: "Please rest and stay hydrated.".to_string(),
            state: Mutex::new(State::default()),
        }
    }

    pub const fn with_session_id(mut self, session_id: i64) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }

    pub fn failing_sends(self) -> Self {
        self.state.lock().fail_send = true;
        self
    }

    pub fn failing_translations(self) -> Self {
        self.set_fail_translate(true);
        self
    }

    pub fn set_fail_translate(&self, fail: bool) {
        self.state.lock().fail_translate = fail;
    }

    pub fn set_fail_history(&self, fail: bool) {
        self.state.lock().fail_history = fail;
    }

    pub fn set_fail_delete(&self, fail: bool) {
        self.state.lock().fail_delete = fail;
    }

    pub fn sent(&self) -> Vec<ChatRequest> {
        self.state.lock().sent.clone()
    }

    pub fn history_calls(&self) -> usize {
        self.state.lock().history_calls
    }

    pub fn translate_calls(&self) -> usize {
        self.state.lock().translate_calls
    }
}

fn unavailable() -> ApiError {
    ApiError::Http {
        status: 503,
        detail: "Service unavailable".to_string(),
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        let mut state = self.state.lock();
        state.sent.push(request.clone());
        if state.fail_send {
            return Err(unavailable());
        }

        Ok(ChatReply {
            response: self.reply.clone(),
            session_id: request.session_id.unwrap_or(self.session_id),
            message_id: 100 + state.sent.len() as i64,
        })
    }

    async fn translate_text(
        &self,
        text: &str,
        _source: Language,
        target: Language,
    ) -> Result<String, ApiError> {
        let mut state = self.state.lock();
        state.translate_calls += 1;
        if state.fail_translate {
            return Err(ApiError::Translation("translator offline".to_string()));
        }
        Ok(format!("[{target}] {text}"))
    }

    async fn chat_history(&self) -> Result<Vec<ChatSession>, ApiError> {
        let mut state = self.state.lock();
        state.history_calls += 1;
        if state.fail_history {
            return Err(unavailable());
        }

        Ok(vec![ChatSession {
            id: self.session_id,
            name: format!("Session {}", self.session_id),
            created_at: Utc::now(),
            message_count: 2,
        }])
    }

    async fn session_messages(&self, session_id: i64) -> Result<SessionMessages, ApiError> {
        if session_id == MISSING_SESSION {
            return Err(ApiError::Http {
                status: 404,
                detail: "Session not found".to_string(),
            });
        }

        let record = |offset: i64, content: &str, sender, language: &str| MessageRecord {
            id: session_id * 10 + offset,
            content: content.to_string(),
            sender,
            language: language.to_string(),
            created_at: Utc::now(),
        };

        Ok(SessionMessages {
            session: SessionInfo {
                id: Some(session_id),
                name: Some(format!("Session {session_id}")),
            },
            messages: vec![
                record(0, "J'ai de la fièvre", Sender::User, "french"),
                record(1, "Drink plenty of fluids.", Sender::Bot, "english"),
            ],
        })
    }

    async fn delete_session(&self, _session_id: i64) -> Result<(), ApiError> {
        if self.state.lock().fail_delete {
            return Err(unavailable());
        }
        Ok(())
    }
}

/// How a [`Translator`] answers `translate_text`.
pub enum TranslateBehavior {
    /// Panics inside the call.
    Panic,
    /// Waits until the barrier's full count of calls is in flight, then
    /// answers like [`FakeBackend`].
    Rendezvous(Arc<Barrier>),
}

/// A [`FakeBackend`] whose translations misbehave in a controlled way.
pub struct Translator {
    inner: FakeBackend,
    behavior: TranslateBehavior,
}

impl Translator {
    pub fn panicking() -> Self {
        Self {
            inner: FakeBackend::new(),
            behavior: TranslateBehavior::Panic,
        }
    }

    /// Every call blocks until `calls` of them are waiting together.
    pub fn rendezvous(calls: usize) -> Self {
        Self {
            inner: FakeBackend::new(),
            behavior: TranslateBehavior::Rendezvous(Arc::new(Barrier::new(calls))),
        }
    }
}

#[async_trait]
impl ChatBackend for Translator {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.inner.send_chat(request).await
    }

    async fn translate_text(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ApiError> {
        match &self.behavior {
            TranslateBehavior::Panic => panic!("translator crashed"),
            TranslateBehavior::Rendezvous(barrier) => {
                barrier.wait().await;
                self.inner.translate_text(text, source, target).await
            }
        }
    }

    async fn chat_history(&self) -> Result<Vec<ChatSession>, ApiError> {
        self.inner.chat_history().await
    }

    async fn session_messages(&self, session_id: i64) -> Result<SessionMessages, ApiError> {
        self.inner.session_messages(session_id).await
    }

    async fn delete_session(&self, session_id: i64) -> Result<(), ApiError> {
        self.inner.delete_session(session_id).await
    }
}
