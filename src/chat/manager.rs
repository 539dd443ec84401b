//! Chat session and translation state manager.
//!
//! [`ChatManager`] owns the active conversation, the session pointer and the
//! history summaries, and mediates every change caused by a user action or a
//! backend response. Backend failures never escape an operation: they become
//! [`Notice`]s, or log lines for translation fallbacks.

use futures_util::future::join_all;
use std::sync::Arc;

use super::backend::ChatBackend;
use super::conversation::Conversation;
use super::message::Message;
use super::notice::{Description, Notice};
use crate::api::{ChatRequest, ChatSession};
use crate::i18n::{BASE_LANGUAGE, Key, Language};

pub struct ChatManager {
    backend: Arc<dyn ChatBackend>,
    conversation: Conversation,
    session_id: Option<i64>,
    history: Vec<ChatSession>,
    is_loading: bool,
    is_loading_history: bool,
    is_translating: bool,
    notices: Vec<Notice>,
}

impl ChatManager {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            conversation: Conversation::default(),
            session_id: None,
            history: Vec::new(),
            is_loading: false,
            is_loading_history: false,
            is_translating: false,
            notices: Vec::new(),
        }
    }

    /// Messages as shown to the user.
    pub fn messages(&self) -> &[Message] {
        self.conversation.displayed()
    }

    /// Messages in the language they were stored in.
    pub fn original_messages(&self) -> &[Message] {
        self.conversation.original()
    }

    pub const fn current_session_id(&self) -> Option<i64> {
        self.session_id
    }

    pub fn chat_history(&self) -> &[ChatSession] {
        &self.history
    }

    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub const fn is_loading_history(&self) -> bool {
        self.is_loading_history
    }

    pub const fn is_translating(&self) -> bool {
        self.is_translating
    }

    /// Drains the notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Sends `content` to the assistant and appends the exchange.
    ///
    /// Whitespace-only content is ignored. With `should_translate` and a
    /// non-base `language`, the text is translated to the base language for
    /// the assistant and the answer translated back for display; either
    /// translation falling through leaves the untranslated text in place.
    pub async fn send_message(&mut self, content: &str, language: Language, should_translate: bool) {
        if content.trim().is_empty() {
            return;
        }

        let translate = should_translate && language != BASE_LANGUAGE;
        let outgoing = if translate {
            self.translate_or_keep(content, language, BASE_LANGUAGE)
                .await
        } else {
            content.to_string()
        };

        let turn = self
            .conversation
            .begin_turn(Message::user(content, language));
        self.is_loading = true;

        let request = ChatRequest {
            message: outgoing,
            language,
            session_id: self.session_id,
        };

        match self.backend.send_chat(&request).await {
            Ok(reply) => {
                let is_new_session = self.session_id.is_none();
                if is_new_session {
                    self.session_id = Some(reply.session_id);
                }

                let shown_text = if translate {
                    self.translate_or_keep(&reply.response, BASE_LANGUAGE, language)
                        .await
                } else {
                    reply.response.clone()
                };

                let id = reply.message_id.to_string();
                let shown = Message::bot(id, shown_text, language);
                let canonical = Message {
                    content: reply.response,
                    ..shown.clone()
                }
                .with_language(BASE_LANGUAGE);
                self.conversation.finalize(turn, shown, canonical);

                if is_new_session {
                    self.load_chat_history().await;
                }
            }
            Err(err) => {
                tracing::warn!(%err, "chat request failed");
                self.notices.push(Notice::from_error(
                    Key::MessageFailed,
                    &err,
                    Key::MessageFailedDesc,
                ));
                self.conversation
                    .close_with_fallback(turn, Message::fallback(language));
            }
        }

        self.is_loading = false;
    }

    /// Refreshes the session summaries. On failure the previous list is kept.
    pub async fn load_chat_history(&mut self) {
        self.is_loading_history = true;

        match self.backend.chat_history().await {
            Ok(history) => self.history = history,
            Err(err) => {
                tracing::warn!(%err, "failed to load chat history");
                self.notices.push(Notice::from_error(
                    Key::HistoryLoadFailed,
                    &err,
                    Key::HistoryLoadFailedDesc,
                ));
            }
        }

        self.is_loading_history = false;
    }

    /// Replaces the conversation with the stored session `session_id`.
    pub async fn load_session(&mut self, session_id: i64) {
        self.is_loading = true;

        match self.backend.session_messages(session_id).await {
            Ok(data) => {
                let messages: Vec<Message> = data.messages.into_iter().map(Message::from).collect();
                let name = data
                    .session
                    .name
                    .unwrap_or_else(|| format!("Chat {session_id}"));
                let count = messages.len();

                self.conversation.replace(messages);
                self.session_id = Some(session_id);

                self.notices.push(Notice::info(
                    Key::SessionLoaded,
                    Description::Localized(
                        Key::SessionLoadedDesc,
                        vec![("count", count.to_string()), ("name", name)],
                    ),
                ));
            }
            Err(err) => {
                tracing::warn!(session_id, %err, "failed to load session");
                self.notices.push(Notice::from_error(
                    Key::SessionLoadFailed,
                    &err,
                    Key::SessionLoadFailedDesc,
                ));
            }
        }

        self.is_loading = false;
    }

    /// Deletes a stored session; deleting the active one starts a new session.
    pub async fn delete_session(&mut self, session_id: i64) {
        match self.backend.delete_session(session_id).await {
            Ok(()) => {
                self.history.retain(|session| session.id != session_id);
                if self.session_id == Some(session_id) {
                    self.start_new_session();
                }
                self.notices.push(Notice::info(
                    Key::SessionDeleted,
                    Description::localized(Key::SessionDeletedDesc),
                ));
            }
            Err(err) => {
                tracing::warn!(session_id, %err, "failed to delete session");
                self.notices.push(Notice::from_error(
                    Key::SessionDeleteFailed,
                    &err,
                    Key::SessionDeleteFailedDesc,
                ));
            }
        }
    }

    /// Forgets the active session; the next message creates a new one.
    pub fn start_new_session(&mut self) {
        self.session_id = None;
        self.conversation.clear();
    }

    /// Re-projects the conversation into `target`.
    ///
    /// Does nothing while another pass is running or when every message is
    /// already tagged `target`. Messages are translated concurrently and the
    /// displayed list is swapped in one step once all of them settle. A
    /// message whose translation fails keeps its text but is still tagged
    /// `target`.
    pub async fn translate_all_messages(&mut self, target: Language) {
        if self.conversation.original().is_empty() || self.is_translating {
            return;
        }
        if self
            .conversation
            .original()
            .iter()
            .all(|message| message.language == target)
        {
            tracing::debug!(%target, "messages already in target language");
            return;
        }

        self.is_translating = true;

        let jobs = self.conversation.original().iter().cloned().map(|message| {
            let backend = Arc::clone(&self.backend);
            tokio::spawn(async move { project_message(backend.as_ref(), message, target).await })
        });

        let projected: Result<Vec<Message>, _> = join_all(jobs).await.into_iter().collect();
        match projected {
            Ok(messages) => self.conversation.project(messages),
            Err(err) => {
                tracing::error!(%err, "translation pass aborted");
                self.notices.push(Notice::error(
                    Key::TranslationFailed,
                    Description::localized(Key::TranslationFailedDesc),
                ));
            }
        }

        self.is_translating = false;
    }

    async fn translate_or_keep(&self, text: &str, source: Language, target: Language) -> String {
        match self.backend.translate_text(text, source, target).await {
            Ok(translated) => translated,
            Err(err) => {
                tracing::warn!(%source, %target, %err, "translation failed, using original text");
                text.to_string()
            }
        }
    }
}

async fn project_message(backend: &dyn ChatBackend, message: Message, target: Language) -> Message {
    if message.is_welcome() || message.language == target {
        return message.with_language(target);
    }

    match backend
        .translate_text(&message.content, message.language, target)
        .await
    {
        Ok(content) => Message {
            content,
            language: target,
            ..message
        },
        Err(err) => {
            tracing::warn!(id = %message.id, %err, "failed to translate message");
            message.with_language(target)
        }
    }
}
